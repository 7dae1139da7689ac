//! Progress mapping: scroll geometry to normalized progress, and progress to
//! the bracketing pair of waypoints.

/// The pair of waypoints bracketing a progress value, plus the local factor
/// between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from_index: usize,
    pub to_index: usize,
    /// Interpolation factor in `[0, 1]` from `from_index` toward `to_index`.
    pub local_t: f32,
}

/// Clamps progress into `[0, 1]`. NaN maps to 0.
///
/// Rubber-banding input devices can overshoot; values are never extrapolated.
pub fn clamp_progress(progress: f32) -> f32 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Length of one segment in progress units for a table of `len` waypoints.
pub fn segment_length(len: usize) -> f32 {
    debug_assert!(len >= 2, "segment length needs at least 2 waypoints");
    1.0 / (len.max(2) - 1) as f32
}

/// Maps `progress` onto a table of `len` waypoints.
///
/// `from_index` is in `0..=len-2`, `to_index == from_index + 1`, and `local_t`
/// is in `[0, 1]`. Progress 1 yields the last segment with `local_t == 1`.
pub fn map_progress(progress: f32, len: usize) -> Segment {
    let last_from = len.max(2) - 2;
    let segment = segment_length(len);
    let progress = clamp_progress(progress);

    let from_index = ((progress / segment).floor() as usize).min(last_from);
    let local_t = ((progress - from_index as f32 * segment) / segment).clamp(0.0, 1.0);

    Segment {
        from_index,
        to_index: from_index + 1,
        local_t,
    }
}

/// Derives progress from scroll geometry in pixels.
///
/// Returns `None` when the content does not scroll (no scrollable distance);
/// callers keep their last known progress in that case.
pub fn progress_from_scroll(scroll_top: f32, scroll_height: f32, viewport_height: f32) -> Option<f32> {
    let scrollable = scroll_height - viewport_height;
    if scrollable.is_nan() || scrollable <= 0.0 || scroll_top.is_nan() {
        return None;
    }
    Some(clamp_progress(scroll_top / scrollable))
}

/// Progress at which section `index` is exactly reached (`index / (len-1)`).
/// Out-of-range indices are clamped to the last section.
pub fn section_progress(index: usize, len: usize) -> f32 {
    let last = len.max(2) - 1;
    index.min(last) as f32 / last as f32
}

/// Scroll offset in pixels that parks the view on section `index`.
pub fn section_scroll_offset(index: usize, len: usize, scrollable_distance: f32) -> f32 {
    section_progress(index, len) * scrollable_distance.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_endpoints() {
        let start = map_progress(0.0, 9);
        assert_eq!((start.from_index, start.to_index), (0, 1));
        assert!(start.local_t.abs() < 1e-6);

        let end = map_progress(1.0, 9);
        assert_eq!((end.from_index, end.to_index), (7, 8));
        assert!((end.local_t - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_exact_boundary_nine_waypoints() {
        // 0.5 / 0.125 == 4.0 exactly
        let segment = map_progress(0.5, 9);
        assert_eq!(segment.from_index, 4);
        assert_eq!(segment.to_index, 5);
        assert!(segment.local_t.abs() < 1e-6);
    }

    #[test]
    fn test_segment_invariants_hold_across_range() {
        for len in [2usize, 3, 8, 9, 17] {
            for step in 0..=1000 {
                let progress = step as f32 / 1000.0;
                let s = map_progress(progress, len);
                assert_eq!(s.to_index - s.from_index, 1);
                assert!(s.to_index < len);
                assert!((0.0..=1.0).contains(&s.local_t), "local_t {} out of range", s.local_t);
            }
        }
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        assert_eq!(map_progress(-0.3, 9), map_progress(0.0, 9));
        assert_eq!(map_progress(1.7, 9), map_progress(1.0, 9));
        assert_eq!(map_progress(f32::NAN, 9), map_progress(0.0, 9));
    }

    #[test]
    fn test_midpoint_of_segment() {
        let s = map_progress(0.1875, 9); // halfway between 1 and 2
        assert_eq!(s.from_index, 1);
        assert!((s.local_t - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_progress_from_scroll() {
        assert_eq!(progress_from_scroll(0.0, 5000.0, 1000.0), Some(0.0));
        assert_eq!(progress_from_scroll(2000.0, 5000.0, 1000.0), Some(0.5));
        assert_eq!(progress_from_scroll(9000.0, 5000.0, 1000.0), Some(1.0));
        assert_eq!(progress_from_scroll(-40.0, 5000.0, 1000.0), Some(0.0));
        assert_eq!(progress_from_scroll(10.0, 800.0, 1000.0), None);
        assert_eq!(progress_from_scroll(10.0, 1000.0, 1000.0), None);
    }

    #[test]
    fn test_scroll_to_section_lands_on_section() {
        let len = 9;
        let scrollable = 8000.0;
        for k in 0..len {
            let offset = section_scroll_offset(k, len, scrollable);
            let progress = progress_from_scroll(offset, scrollable + 1000.0, 1000.0).unwrap();
            let s = map_progress(progress, len);
            let lands_on_from = s.from_index == k && s.local_t.abs() < 1e-4;
            let lands_on_to = s.to_index == k && (s.local_t - 1.0).abs() < 1e-4;
            assert!(lands_on_from || lands_on_to, "section {k} mapped to {s:?}");
        }
    }

    #[test]
    fn test_section_progress_clamps_index() {
        assert!((section_progress(4, 9) - 0.5).abs() < 1e-6);
        assert!((section_progress(40, 9) - 1.0).abs() < 1e-6);
        assert!(section_scroll_offset(3, 9, -100.0).abs() < 1e-6);
    }
}
