use glam::{Mat4, Vec3};

/// One entry in the fixed back-to-front compositing order.
///
/// There is no depth buffer; the order itself encodes compositing. The
/// background is the full backdrop, the star is the only dynamic foreground
/// element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Background,
    Disk,
    Ring,
    BlackHole,
    Star,
}

impl LayerKind {
    /// Draw order. Length and sequence are invariants of the scene.
    pub const ORDER: [LayerKind; 5] = [
        LayerKind::Background,
        LayerKind::Disk,
        LayerKind::Ring,
        LayerKind::BlackHole,
        LayerKind::Star,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LayerKind::Background => "background",
            LayerKind::Disk => "disk",
            LayerKind::Ring => "ring",
            LayerKind::BlackHole => "blackhole",
            LayerKind::Star => "star",
        }
    }

    /// Model matrix for this layer given the star's current position.
    ///
    /// Static layers sit at the origin with identity; only the star layer
    /// follows the integrated body.
    pub fn model_matrix(&self, star_position: Vec3) -> Mat4 {
        match self {
            LayerKind::Star => Mat4::from_translation(star_position),
            _ => Mat4::IDENTITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_has_five_layers_back_to_front() {
        assert_eq!(LayerKind::ORDER.len(), 5);
        assert_eq!(
            LayerKind::ORDER,
            [
                LayerKind::Background,
                LayerKind::Disk,
                LayerKind::Ring,
                LayerKind::BlackHole,
                LayerKind::Star,
            ]
        );
    }

    #[test]
    fn background_first_star_last() {
        assert_eq!(LayerKind::ORDER[0], LayerKind::Background);
        assert_eq!(LayerKind::ORDER[4], LayerKind::Star);
    }

    #[test]
    fn only_star_layer_tracks_the_body() {
        let star_pos = Vec3::new(0.0, 0.0, 7.5);
        for kind in LayerKind::ORDER {
            let model = kind.model_matrix(star_pos);
            if kind == LayerKind::Star {
                assert_eq!(model, Mat4::from_translation(star_pos));
            } else {
                assert_eq!(model, Mat4::IDENTITY);
            }
        }
    }

    #[test]
    fn labels_are_unique() {
        for (i, a) in LayerKind::ORDER.iter().enumerate() {
            for b in &LayerKind::ORDER[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
