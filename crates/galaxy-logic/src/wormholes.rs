//! Wormhole endpoint tagging.
//!
//! Both endpoint stars of pair `k` get the flag `painted_galaxy_wormhole_<k>`.
//! Malformed input is not rejected: a star listed in several pairs gets
//! several flags.

use crate::constants::flags;
use crate::coords::Point;
use crate::map::Connection;

pub fn wormhole_flag(pair: usize) -> String {
    format!("{}{}", flags::WORMHOLE_PREFIX, pair)
}

/// Flags for `star`, one per pair it is an endpoint of, in pair order.
pub fn wormhole_flags(wormholes: &[Connection], star: Point) -> Vec<String> {
    let key = star.key();
    wormholes
        .iter()
        .enumerate()
        .filter(|(_, (a, b))| a.key() == key || b.key() == key)
        .map(|(k, _)| wormhole_flag(k))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_both_endpoints_tagged_with_pair_index() {
        let wormholes = vec![
            (p(1.0, 1.0), p(2.0, 2.0)),
            (p(3.0, 3.0), p(4.0, 4.0)),
        ];
        assert_eq!(wormhole_flags(&wormholes, p(1.0, 1.0)), vec!["painted_galaxy_wormhole_0"]);
        assert_eq!(wormhole_flags(&wormholes, p(2.0, 2.0)), vec!["painted_galaxy_wormhole_0"]);
        assert_eq!(wormhole_flags(&wormholes, p(4.0, 4.0)), vec!["painted_galaxy_wormhole_1"]);
        assert!(wormhole_flags(&wormholes, p(5.0, 5.0)).is_empty());
    }

    #[test]
    fn test_star_in_several_pairs_gets_several_flags() {
        let wormholes = vec![
            (p(1.0, 1.0), p(2.0, 2.0)),
            (p(3.0, 3.0), p(1.0, 1.0)),
        ];
        assert_eq!(
            wormhole_flags(&wormholes, p(1.0, 1.0)),
            vec!["painted_galaxy_wormhole_0", "painted_galaxy_wormhole_1"]
        );
    }

    #[test]
    fn test_self_loop_tags_once() {
        let wormholes = vec![(p(1.0, 1.0), p(1.0, 1.0))];
        assert_eq!(wormhole_flags(&wormholes, p(1.0, 1.0)).len(), 1);
    }
}
