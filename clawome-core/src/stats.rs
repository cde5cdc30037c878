/// Summary statistics returned alongside every extraction (§6).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractStats {
    pub raw_html_chars: usize,
    pub rendered_chars: usize,
    pub nodes_before_compression: usize,
    pub nodes_after_compression: usize,
    /// True if Walk stopped early on `max_nodes`/`max_depth` rather than
    /// exhausting the document. Not an error (§7).
    pub truncated: bool,
}

impl ExtractStats {
    /// chars / 4, the approximation this system uses throughout for
    /// token counts.
    pub fn approx_tokens_raw(&self) -> usize {
        self.raw_html_chars / 4
    }

    pub fn approx_tokens_rendered(&self) -> usize {
        self.rendered_chars / 4
    }

    pub fn compression_ratio(&self) -> f64 {
        if self.raw_html_chars == 0 {
            return 0.0;
        }
        self.rendered_chars as f64 / self.raw_html_chars as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compression_ratio_handles_empty_input() {
        let stats = ExtractStats::default();
        assert_eq!(stats.compression_ratio(), 0.0);
    }

    #[test]
    fn approx_tokens_divide_by_four() {
        let stats = ExtractStats {
            raw_html_chars: 4_000,
            rendered_chars: 400,
            ..Default::default()
        };
        assert_eq!(stats.approx_tokens_raw(), 1_000);
        assert_eq!(stats.approx_tokens_rendered(), 100);
    }
}
