/// A set of `usize` values bounded by a fixed capacity
///
/// Membership is a dense bitmap so insert/remove/contains are O(1) and
/// iteration is in ascending order.
#[derive(Clone, Debug)]
pub struct RangeSet {
    len: usize,
    domain: Vec<bool>,
}

impl RangeSet {
    pub fn new(capacity: usize) -> RangeSet {
        RangeSet {
            len: 0,
            domain: vec![false; capacity],
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, n: usize) -> bool {
        self.domain[n]
    }

    pub fn insert(&mut self, n: usize) -> bool {
        if self.domain[n] {
            return false;
        }
        self.domain[n] = true;
        self.len += 1;
        true
    }

    pub fn remove(&mut self, n: usize) -> bool {
        if !self.domain[n] {
            return false;
        }
        self.domain[n] = false;
        self.len -= 1;
        true
    }

    pub fn clear(&mut self) {
        for e in &mut self.domain {
            *e = false;
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            domain: &self.domain,
            index: 0,
        }
    }
}

pub struct Iter<'a> {
    domain: &'a [bool],
    index: usize,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.index < self.domain.len() {
            let i = self.index;
            self.index += 1;
            if self.domain[i] {
                return Some(i);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::RangeSet;

    #[test]
    fn insert_remove() {
        let mut set = RangeSet::new(5);
        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert_eq!(1, set.len());
        assert!(set.remove(3));
        assert!(!set.remove(3));
        assert!(set.is_empty());
    }

    #[test]
    fn iter_ascending() {
        let mut set = RangeSet::new(6);
        set.insert(4);
        set.insert(1);
        set.insert(2);
        assert_eq!(vec![1, 2, 4], set.iter().collect::<Vec<_>>());
    }
}
