//! Link card presentation.
//!
//! Maps a link's `thumbnailSize`, `thumbnail` and `animation` fields to the
//! card the renderer draws. Validation already rejected bad values, so this
//! never fails: any combination that can't produce an image card falls back
//! to [`CardVariant::TextOnly`].

use crate::schema::{Animation, LinkRecord, ThumbnailSize};

/// How a thumbnail fills its fixed-size box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFit {
    /// Scale to fit without cropping (vector icons).
    Contain,
    /// Crop to fill (photos).
    Cover,
}

/// Card layout for one link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardVariant<'a> {
    /// Thumbnail full width above the title.
    FullImage { thumbnail: &'a str },
    /// Small thumbnail beside the title.
    InlineIcon { thumbnail: &'a str, fit: ImageFit },
    /// Centered title, no image.
    TextOnly,
}

/// Hover decoration. At most one per card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverEffect {
    Glow,
    Scale,
    Bounce,
    Shake,
}

impl HoverEffect {
    pub fn from_animation(animation: Animation) -> Option<Self> {
        match animation {
            Animation::None => None,
            Animation::Glow => Some(Self::Glow),
            Animation::Scale => Some(Self::Scale),
            Animation::Bounce => Some(Self::Bounce),
            Animation::Shake => Some(Self::Shake),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Glow => "glow",
            Self::Scale => "scale",
            Self::Bounce => "bounce",
            Self::Shake => "shake",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStyle<'a> {
    pub variant: CardVariant<'a>,
    pub hover: Option<HoverEffect>,
}

/// Choose the card layout and hover effect for a link.
pub fn select(link: &LinkRecord) -> CardStyle<'_> {
    let thumbnail = link.thumbnail.as_deref().filter(|t| !t.trim().is_empty());
    let variant = match (link.thumbnail_size, thumbnail) {
        (ThumbnailSize::Large, Some(thumbnail)) => CardVariant::FullImage { thumbnail },
        (ThumbnailSize::Small, Some(thumbnail)) => CardVariant::InlineIcon {
            thumbnail,
            fit: if is_vector_icon(thumbnail) {
                ImageFit::Contain
            } else {
                ImageFit::Cover
            },
        },
        _ => CardVariant::TextOnly,
    };
    CardStyle {
        variant,
        hover: HoverEffect::from_animation(link.animation),
    }
}

/// SVG references get contain-fit. Query strings and fragments are ignored.
pub fn is_vector_icon(reference: &str) -> bool {
    let path = reference
        .split(['?', '#'])
        .next()
        .unwrap_or(reference);
    path.to_ascii_lowercase().ends_with(".svg")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::link;

    fn styled(size: ThumbnailSize, thumbnail: Option<&str>, animation: Animation) -> LinkRecord {
        let mut l = link("Card", "main", 1, "card.yml");
        l.thumbnail_size = size;
        l.thumbnail = thumbnail.map(str::to_string);
        l.animation = animation;
        l
    }

    #[test]
    fn large_with_thumbnail_is_full_image() {
        let l = styled(ThumbnailSize::Large, Some("/thumbnails/a.png"), Animation::None);
        assert_eq!(
            select(&l).variant,
            CardVariant::FullImage {
                thumbnail: "/thumbnails/a.png"
            }
        );
    }

    #[test]
    fn large_without_thumbnail_is_text_only() {
        let l = styled(ThumbnailSize::Large, None, Animation::None);
        assert_eq!(select(&l).variant, CardVariant::TextOnly);
        let l = styled(ThumbnailSize::Large, Some("  "), Animation::None);
        assert_eq!(select(&l).variant, CardVariant::TextOnly);
    }

    #[test]
    fn small_svg_is_contained_icon() {
        let l = styled(ThumbnailSize::Small, Some("/icons/x.svg"), Animation::None);
        assert_eq!(
            select(&l).variant,
            CardVariant::InlineIcon {
                thumbnail: "/icons/x.svg",
                fit: ImageFit::Contain
            }
        );
    }

    #[test]
    fn small_photo_is_cropped_icon() {
        let l = styled(ThumbnailSize::Small, Some("/thumbnails/me.jpg"), Animation::None);
        assert_eq!(
            select(&l).variant,
            CardVariant::InlineIcon {
                thumbnail: "/thumbnails/me.jpg",
                fit: ImageFit::Cover
            }
        );
    }

    #[test]
    fn small_without_thumbnail_is_text_only() {
        let l = styled(ThumbnailSize::Small, None, Animation::Glow);
        assert_eq!(select(&l).variant, CardVariant::TextOnly);
    }

    #[test]
    fn thumbnail_without_size_is_text_only() {
        let l = styled(ThumbnailSize::None, Some("/thumbnails/a.png"), Animation::None);
        assert_eq!(select(&l).variant, CardVariant::TextOnly);
    }

    #[test]
    fn hover_is_independent_of_variant() {
        let l = styled(ThumbnailSize::Large, Some("/a.png"), Animation::Shake);
        assert_eq!(select(&l).hover, Some(HoverEffect::Shake));
        let l = styled(ThumbnailSize::None, None, Animation::Bounce);
        let style = select(&l);
        assert_eq!(style.variant, CardVariant::TextOnly);
        assert_eq!(style.hover, Some(HoverEffect::Bounce));
    }

    #[test]
    fn each_animation_maps_to_one_effect() {
        assert_eq!(HoverEffect::from_animation(Animation::None), None);
        let effects: Vec<HoverEffect> = Animation::ALL
            .into_iter()
            .filter_map(HoverEffect::from_animation)
            .collect();
        assert_eq!(
            effects,
            vec![
                HoverEffect::Glow,
                HoverEffect::Scale,
                HoverEffect::Bounce,
                HoverEffect::Shake
            ]
        );
        let labels: Vec<&str> = effects.iter().map(|e| e.as_str()).collect();
        assert_eq!(labels, vec!["glow", "scale", "bounce", "shake"]);
    }

    #[test]
    fn vector_icon_detection() {
        assert!(is_vector_icon("/icons/x.svg"));
        assert!(is_vector_icon("/icons/X.SVG"));
        assert!(is_vector_icon("https://cdn.example.com/logo.svg?v=3"));
        assert!(is_vector_icon("/icons/logo.svg#mark"));
        assert!(!is_vector_icon("/icons/x.png"));
        assert!(!is_vector_icon("/icons/svg.png"));
        assert!(!is_vector_icon("/icons/x.svgz"));
    }
}
