use std::rc::Rc;

use bit_set::BitSet;

use crate::color::Color;

/** candidate colors of a vertex that is not colored yet.
An empty domain means the branch is dead.
*/
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Domain {
    values: BitSet,
}

impl Domain {
    /// domain {0, 1, ..., max_color}
    pub fn full(max_color:Color) -> Self {
        let mut values = BitSet::with_capacity(max_color+1);
        for c in 0..=max_color { values.insert(c); }
        Self { values }
    }

    /// domain {c}
    pub fn singleton(c:Color) -> Self {
        let mut values = BitSet::with_capacity(c+1);
        values.insert(c);
        Self { values }
    }

    /// number of candidate colors
    pub fn len(&self) -> usize { self.values.len() }

    /// true iff no color is left
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// the only value of the domain if it contains exactly one
    pub fn forced_value(&self) -> Option<Color> {
        let mut it = self.values.iter();
        match (it.next(), it.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    /// true iff c is a candidate
    pub fn contains(&self, c:Color) -> bool { self.values.contains(c) }

    /// removes c, returns true if it was a candidate
    pub fn remove(&mut self, c:Color) -> bool { self.values.remove(c) }

    /// true iff some candidate is greater than max_color
    pub fn exceeds(&self, max_color:Color) -> bool {
        ((max_color+1)..self.values.capacity()).any(|c| self.values.contains(c))
    }

    /// removes every value greater than max_color, returns true if the domain changed
    pub fn truncate(&mut self, max_color:Color) -> bool {
        let mut changed = false;
        for c in (max_color+1)..self.values.capacity() {
            changed |= self.values.remove(c);
        }
        changed
    }

    /// candidate colors in ascending order
    pub fn iter(&self) -> impl Iterator<Item=Color> + '_ {
        self.values.iter()
    }
}

impl std::iter::FromIterator<Color> for Domain {
    fn from_iter<I: IntoIterator<Item=Color>>(iter: I) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}


/** domain shared between a node and its children until one of them modifies it
(copy on write through `Rc::make_mut`).
*/
pub type SharedDomain = Rc<Domain>;

/// restricts d to colors ≤ max_color, copying it only if a value goes away
fn truncate_shared(d:&mut SharedDomain, max_color:Color) {
    if d.exceeds(max_color) {
        Rc::make_mut(d).truncate(max_color);
    }
}


/**
filters the domains of the uncolored vertices (domains[0] is the next vertex to color).
 - symmetry breaking: the next vertex either reuses a color or takes the smallest new one
   (max_color_used+1). Larger colors are renamings of this one.
 - bounding: if a solution with best_nb_colors colors is known, all colors ≥ best_nb_colors
   are removed from every domain.

returns false if a domain becomes empty (dead branch).
*/
pub fn filter_domains(max_color_used:Color, domains:&mut [SharedDomain], best_nb_colors:Option<usize>) -> bool {
    if let Some(next) = domains.first_mut() {
        truncate_shared(next, max_color_used+1);
        if next.is_empty() { return false; }
    }
    if let Some(best) = best_nb_colors {
        if best == 0 { return false; }
        let bound = best - 1;
        for d in domains.iter_mut() {
            truncate_shared(d, bound);
            if d.is_empty() { return false; }
        }
    }
    true
}


#[cfg(test)]
mod tests {
    use super::*;

    fn values(d:&Domain) -> Vec<Color> { d.iter().collect() }

    fn shared(domains:Vec<Domain>) -> Vec<SharedDomain> {
        domains.into_iter().map(Rc::new).collect()
    }

    #[test]
    fn test_full_and_singleton() {
        assert_eq!(values(&Domain::full(3)), vec![0,1,2,3]);
        assert_eq!(Domain::full(3).forced_value(), None);
        assert_eq!(Domain::singleton(4).forced_value(), Some(4));
        assert_eq!(Domain::default().forced_value(), None);
        assert!(Domain::default().is_empty());
    }

    #[test]
    fn test_truncate() {
        let mut d:Domain = vec![0,2,5,7].into_iter().collect();
        assert!(d.truncate(5));
        assert_eq!(values(&d), vec![0,2,5]);
        assert!(!d.truncate(5));
        assert!(d.truncate(0));
        assert_eq!(values(&d), vec![0]);
    }

    #[test]
    fn test_exceeds() {
        let d:Domain = vec![1,3].into_iter().collect();
        assert!(d.exceeds(2));
        assert!(!d.exceeds(3));
        assert!(!d.exceeds(10));
        assert!(!Domain::default().exceeds(0));
    }

    #[test]
    fn test_filter_copies_only_modified_domains() {
        let full = Rc::new(Domain::full(5));
        let small:SharedDomain = Rc::new(vec![0,1].into_iter().collect());
        let parent = vec![full.clone(), small.clone(), full.clone()];
        let mut domains = parent.clone();
        assert!(filter_domains(0, &mut domains, Some(4)));
        // truncated domains are private copies, the parent still sees the originals
        assert!(!Rc::ptr_eq(&domains[0], &full));
        assert!(!Rc::ptr_eq(&domains[2], &full));
        assert_eq!(values(&domains[0]), vec![0,1]);
        assert_eq!(values(&domains[2]), vec![0,1,2,3]);
        assert_eq!(values(&parent[0]), vec![0,1,2,3,4,5]);
        // untouched domain still shared
        assert!(Rc::ptr_eq(&domains[1], &small));
    }

    #[test]
    fn test_filter_symmetry_breaking() {
        let mut domains = shared(vec![Domain::full(5), Domain::full(5)]);
        assert!(filter_domains(1, &mut domains, None));
        assert_eq!(values(&domains[0]), vec![0,1,2]);
        assert_eq!(values(&domains[1]), vec![0,1,2,3,4,5]);
    }

    #[test]
    fn test_filter_bounding() {
        let mut domains = shared(vec![Domain::full(5), Domain::full(5), vec![1,4].into_iter().collect()]);
        assert!(filter_domains(2, &mut domains, Some(3)));
        assert_eq!(values(&domains[0]), vec![0,1,2]);
        assert_eq!(values(&domains[1]), vec![0,1,2]);
        assert_eq!(values(&domains[2]), vec![1]);
    }

    #[test]
    fn test_filter_empty_next_domain() {
        let mut domains = shared(vec![vec![4,5].into_iter().collect(), Domain::full(5)]);
        assert!(!filter_domains(1, &mut domains, None));
    }

    #[test]
    fn test_filter_empty_remaining_domain() {
        let mut domains = shared(vec![Domain::full(5), vec![3,4].into_iter().collect()]);
        assert!(!filter_domains(0, &mut domains, Some(3)));
    }

    #[test]
    fn test_filter_idempotent() {
        let mut domains = shared(vec![Domain::full(6), Domain::full(6), vec![0,3,6].into_iter().collect()]);
        assert!(filter_domains(2, &mut domains, Some(5)));
        let once = domains.clone();
        assert!(filter_domains(2, &mut domains, Some(5)));
        assert_eq!(domains, once);
    }

    #[test]
    fn test_filter_no_domains() {
        assert!(filter_domains(3, &mut [], Some(2)));
    }
}
