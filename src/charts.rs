//! Chart-shaping helpers shared by the renderers and the API.

/// Month-axis tick selection: every third month starting at the first,
/// with the final month always labeled. Mirrors the source dashboard's
/// axis so long ranges stay readable without losing the series end.
pub fn month_tick_positions(len: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let mut ticks: Vec<usize> = (0..len).step_by(3).collect();
    let last = len - 1;
    if ticks.last() != Some(&last) {
        ticks.push(last);
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_third_plus_final() {
        assert_eq!(month_tick_positions(8), vec![0, 3, 6, 7]);
        assert_eq!(month_tick_positions(10), vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_last_index_appears_once() {
        for len in 1..40 {
            let ticks = month_tick_positions(len);
            assert_eq!(ticks[0], 0);
            assert_eq!(*ticks.last().unwrap(), len - 1);
            assert_eq!(
                ticks.iter().filter(|&&t| t == len - 1).count(),
                1,
                "len={len}"
            );
        }
    }

    #[test]
    fn test_degenerate_lengths() {
        assert!(month_tick_positions(0).is_empty());
        assert_eq!(month_tick_positions(1), vec![0]);
        assert_eq!(month_tick_positions(2), vec![0, 1]);
    }
}
