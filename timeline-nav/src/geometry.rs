/// Horizontal layout derived from card size, spacing, event count and viewport width.
///
/// Every card occupies one `step` (`card_width + spacing`), including the trailing gap after
/// the last card, so `total_width = count * step`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub count: usize,
    pub step: u64,
    pub total_width: u64,
    pub viewport_width: u32,
    pub max_translate: u64,
}

impl Geometry {
    pub fn compute(count: usize, card_width: u32, spacing: u32, viewport_width: u32) -> Self {
        let step = card_width as u64 + spacing as u64;
        let total_width = (count as u64).saturating_mul(step);
        let max_translate = total_width.saturating_sub(viewport_width as u64);
        Self {
            count,
            step,
            total_width,
            viewport_width,
            max_translate,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn last_index(&self) -> usize {
        self.count.saturating_sub(1)
    }

    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.last_index())
    }

    pub fn clamp_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_translate)
    }

    /// Committed offset for `index`: `min(index * step, max_translate)`.
    pub fn offset_for_index(&self, index: usize) -> u64 {
        self.clamp_offset((index as u64).saturating_mul(self.step))
    }

    /// Index whose card start is closest to `offset`, after clamping the offset into
    /// `[0, max_translate]`.
    ///
    /// Halfway points round up, so a gesture that crosses half a step lands on the next card.
    pub fn nearest_index(&self, offset: f32) -> usize {
        if self.count == 0 || self.step == 0 {
            return 0;
        }
        let max = self.max_translate as f64;
        let candidate = if offset.is_nan() {
            0.0
        } else {
            (offset as f64).clamp(0.0, max)
        };
        // candidate is non-negative, so truncating `x + 0.5` rounds half up without libm.
        let nearest = (candidate / self.step as f64 + 0.5) as usize;
        self.clamp_index(nearest)
    }
}
