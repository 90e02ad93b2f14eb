//! Wheel geometry.
//!
//! Pure mapping between segment indices and rotation angles. Angles are in
//! radians and grow in the direction the wheel spins.
use std::f64::consts::{FRAC_PI_2, TAU};

use crate::types::SegmentId;

/// Angular layout of a wheel with `segment_count` equal wedges.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelLayout {
    segment_count: u32,
    segment_angle: f64,
    pointer_offset: f64,
}

impl WheelLayout {
    /// Builds a layout; `segment_count` is clamped to at least one wedge.
    pub fn new(segment_count: u32, pointer_offset: f64) -> Self {
        let segment_count = segment_count.max(1);
        Self {
            segment_count,
            segment_angle: TAU / f64::from(segment_count),
            pointer_offset,
        }
    }

    pub fn from_config(config: &crate::GameConfig) -> Self {
        Self::new(config.segment_count, config.pointer_offset)
    }

    pub const fn segment_count(&self) -> u32 {
        self.segment_count
    }

    pub const fn segment_angle(&self) -> f64 {
        self.segment_angle
    }

    pub const fn pointer_offset(&self) -> f64 {
        self.pointer_offset
    }

    pub const fn contains(&self, segment: SegmentId) -> bool {
        segment.0 < self.segment_count
    }

    pub fn segments(&self) -> impl Iterator<Item = SegmentId> {
        (0..self.segment_count).map(SegmentId)
    }

    /// Angle of the middle of a wedge, measured from the wheel's zero mark.
    pub fn center_of(&self, segment: SegmentId) -> f64 {
        f64::from(segment.0) * self.segment_angle + self.segment_angle / 2.0
    }

    /// Rotation (modulo a full turn) that brings `segment` under the pointer.
    pub fn pointer_target(&self, segment: SegmentId) -> f64 {
        self.center_of(segment) + self.pointer_offset
    }

    /// Signed index of the wedge boundary interval `angle` falls into.
    ///
    /// Not reduced modulo the segment count: it keeps increasing with every
    /// turn, which is what tick cadence counts.
    pub fn crossing_index(&self, angle: f64) -> i64 {
        (angle / self.segment_angle).floor() as i64
    }

    /// Segment shown under the pointer when the wheel sits at `rotation`.
    pub fn segment_under_pointer(&self, rotation: f64) -> SegmentId {
        let local = (rotation - self.pointer_offset).rem_euclid(TAU);
        let index = (local / self.segment_angle).floor() as u32;
        // rem_euclid can round up to exactly TAU for tiny negative inputs
        SegmentId(index.min(self.segment_count - 1))
    }

    /// Orientation of the result highlight wedge drawn over `segment`.
    pub fn highlight_rotation(&self, segment: SegmentId) -> f64 {
        -(self.center_of(segment) - FRAC_PI_2)
    }
}

impl Default for WheelLayout {
    fn default() -> Self {
        Self::from_config(&crate::GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn eight_segments_are_eighth_turns() {
        let layout = WheelLayout::default();
        assert_eq!(layout.segment_count(), 8);
        assert!((layout.segment_angle() - TAU / 8.0).abs() < EPS);
        assert!((layout.center_of(SegmentId(0)) - TAU / 16.0).abs() < EPS);
        assert!((layout.center_of(SegmentId(3)) - 7.0 * TAU / 16.0).abs() < EPS);
    }

    #[test]
    fn pointer_target_adds_offset() {
        let layout = WheelLayout::default();
        let target = layout.pointer_target(SegmentId(2));
        assert!((target - (layout.center_of(SegmentId(2)) + FRAC_PI_2)).abs() < EPS);
    }

    #[test]
    fn crossing_index_floors_negative_angles() {
        let layout = WheelLayout::default();
        assert_eq!(layout.crossing_index(0.0), 0);
        assert_eq!(layout.crossing_index(-0.01), -1);
        assert_eq!(layout.crossing_index(TAU + 0.01), 8);
    }

    #[test]
    fn pointer_target_round_trips_through_whole_turns() {
        let layout = WheelLayout::default();
        for segment in layout.segments() {
            for turns in 0..10 {
                let rotation = layout.pointer_target(segment) + TAU * f64::from(turns);
                assert_eq!(layout.segment_under_pointer(rotation), segment);
            }
        }
    }

    #[test]
    fn single_segment_wheel() {
        let layout = WheelLayout::new(0, 0.0);
        assert_eq!(layout.segment_count(), 1);
        assert!(layout.contains(SegmentId(0)));
        assert!(!layout.contains(SegmentId(1)));
        assert_eq!(layout.segment_under_pointer(123.4), SegmentId(0));
    }

    #[test]
    fn highlight_faces_pointer_for_first_quarter() {
        let layout = WheelLayout::new(4, FRAC_PI_2);
        // center of segment 0 is PI/4, so the wedge turns back by PI/4 - PI/2
        assert!((layout.highlight_rotation(SegmentId(0)) - FRAC_PI_2 / 2.0).abs() < EPS);
    }
}
