//! Set algebra as linear merges over sorted buffers.

use std::cmp::Ordering;

use crate::types::GraphResult;

use super::OrderedSet;

impl<T: Ord + Clone> OrderedSet<T> {
    /// Elements present in both `self` and `other`, via a merge-join. O(n+m).
    pub fn intersection(&self, other: &Self) -> GraphResult<Self> {
        let mut result = Self::new();
        let (left, right) = (self.as_slice(), other.as_slice());
        let (mut i, mut j) = (0, 0);

        while i < left.len() && j < right.len() {
            match left[i].cmp(&right[j]) {
                Ordering::Equal => {
                    result.push_back(left[i].clone())?;
                    i += 1;
                    j += 1;
                }
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
            }
        }

        Ok(result)
    }

    /// Elements present in either set, duplicates collapsed. O(n+m).
    pub fn union(&self, other: &Self) -> GraphResult<Self> {
        if self.is_empty() {
            return Ok(other.clone());
        }
        if other.is_empty() {
            return Ok(self.clone());
        }

        let mut result = Self::new();
        let (left, right) = (self.as_slice(), other.as_slice());
        let (mut i, mut j) = (0, 0);

        while i < left.len() || j < right.len() {
            if i == left.len() {
                result.push_back(right[j].clone())?;
                j += 1;
            } else if j == right.len() {
                result.push_back(left[i].clone())?;
                i += 1;
            } else {
                match left[i].cmp(&right[j]) {
                    Ordering::Equal => {
                        result.push_back(left[i].clone())?;
                        i += 1;
                        j += 1;
                    }
                    Ordering::Less => {
                        result.push_back(left[i].clone())?;
                        i += 1;
                    }
                    Ordering::Greater => {
                        result.push_back(right[j].clone())?;
                        j += 1;
                    }
                }
            }
        }

        Ok(result)
    }

    /// Elements of `self` that are not in `other`. O(n log m).
    pub fn difference(&self, other: &Self) -> GraphResult<Self> {
        if other.is_empty() {
            return Ok(self.clone());
        }

        let mut result = Self::new();
        for item in self.iter() {
            if !other.contains(item) {
                result.push_back(item.clone())?;
            }
        }

        Ok(result)
    }
}
