//! Array to map conversions.

//---------------------------------------------------------------------------------------------------- Import
use std::{collections::HashMap, hash::Hash};

use crate::error::ArrayError;

//---------------------------------------------------------------------------------------------------- Free functions
/// Build a map out of `(key, value)` pairs.
///
/// Later duplicate keys overwrite earlier ones. Absent stays absent.
///
/// ```rust
/// # use commons_array::*;
/// let map = to_map(Some([("a", 1), ("b", 2), ("a", 3)].as_slice())).unwrap();
/// assert_eq!(map.len(), 2);
/// assert_eq!(map["a"], 3);
/// assert_eq!(to_map::<u8, u8>(None), None);
/// ```
pub fn to_map<K, V>(array: Option<&[(K, V)]>) -> Option<HashMap<K, V>>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    let array = array?;
    let mut map = HashMap::with_capacity(array.len());

    for (index, (key, value)) in array.iter().enumerate() {
        if map.insert(key.clone(), value.clone()).is_some() {
            tracing::trace!(index, "duplicate key overwritten");
        }
    }

    Some(map)
}

/// Build a map out of rows, column 0 is the key and column 1 the value.
///
/// Extra columns are ignored. Later duplicate keys overwrite earlier ones.
/// Absent stays absent.
///
/// ```rust
/// # use commons_array::*;
/// let colors = [["RED", "#F00"], ["BLUE", "#00F"]];
/// let map = rows_to_map(Some(colors.as_slice())).unwrap().unwrap();
/// assert_eq!(map["RED"], "#F00");
/// assert_eq!(map["BLUE"], "#00F");
///
/// let err = rows_to_map(Some([["RED"]].as_slice())).unwrap_err();
/// assert_eq!(err, ArrayError::RowTooShort { index: 0, length: 1 });
/// ```
///
/// # Errors
/// Returns [`ArrayError::RowTooShort`] for the first row with fewer than 2 columns.
pub fn rows_to_map<R, T>(array: Option<&[R]>) -> Result<Option<HashMap<T, T>>, ArrayError>
where
    R: AsRef<[T]>,
    T: Eq + Hash + Clone,
{
    let Some(array) = array else {
        return Ok(None);
    };

    let mut map = HashMap::with_capacity(array.len());

    for (index, row) in array.iter().enumerate() {
        let [key, value, ..] = row.as_ref() else {
            return Err(ArrayError::RowTooShort {
                index,
                length: row.as_ref().len(),
            });
        };

        if map.insert(key.clone(), value.clone()).is_some() {
            tracing::trace!(index, "duplicate key overwritten");
        }
    }

    Ok(Some(map))
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn extra_columns_are_ignored() {
        let rows = [vec![1, 2, 3], vec![4, 5]];
        let map = rows_to_map(Some(rows.as_slice())).unwrap().unwrap();
        assert_eq!(map, HashMap::from([(1, 2), (4, 5)]));
    }

    #[test]
    fn later_rows_win() {
        let rows = [["k", "old"], ["k", "new"]];
        let map = rows_to_map(Some(rows.as_slice())).unwrap().unwrap();
        assert_eq!(map, HashMap::from([("k", "new")]));
    }

    #[test]
    fn absent_and_empty() {
        assert_eq!(rows_to_map::<[u8; 2], u8>(None), Ok(None));
        assert_eq!(
            rows_to_map::<[u8; 2], u8>(Some(&[])),
            Ok(Some(HashMap::new()))
        );
    }

    #[test]
    fn short_row_after_valid_rows() {
        let rows = [vec!["a", "b"], vec![]];
        assert_eq!(
            rows_to_map(Some(rows.as_slice())),
            Err(ArrayError::RowTooShort {
                index: 1,
                length: 0
            })
        );
    }
}
