use serde::{Deserialize, Serialize};

/// Canonical recommendation. Field names are the JSON keys the model is
/// asked to produce.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendation {
    pub primary_outfit: PrimaryOutfit,
    pub additional_suggestions: Vec<Alternative>,
    pub styling_notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimaryOutfit {
    pub title: String,
    pub top: String,
    pub bottom: String,
    pub footwear: String,
    pub accessories: Vec<String>,
    pub reasoning: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alternative {
    pub label: String,
    pub outfit_summary: String,
}

/// Fixed look served when no generation backend is configured.
pub fn sample_recommendation() -> Recommendation {
    Recommendation {
        primary_outfit: PrimaryOutfit {
            title: "Soft Cocktail Evening".into(),
            top: "Satin camisole in muted blush with delicate straps.".into(),
            bottom: "High-waisted tailored trousers in warm beige.".into(),
            footwear: "Strappy block-heel sandals in nude.".into(),
            accessories: vec![
                "Minimal gold necklace".into(),
                "Structured mini clutch".into(),
                "Thin gold bracelet".into(),
            ],
            reasoning: "Elegant yet comfortable, suitable for most semi-formal occasions and easy to personalize with makeup and hair.".into(),
        },
        additional_suggestions: vec![
            Alternative {
                label: "Casual Alternative".into(),
                outfit_summary: "Relaxed linen shirt, straight-leg jeans, and white sneakers with a canvas tote.".into(),
            },
            Alternative {
                label: "Trendier Option".into(),
                outfit_summary: "Cropped blazer, wide-leg pants, chunky loafers, and a mini shoulder bag.".into(),
            },
            Alternative {
                label: "Budget-Friendly Choice".into(),
                outfit_summary: "Solid tee, black jeans, simple flats, and a small crossbody bag.".into(),
            },
        ],
        styling_notes: "Keep accessories minimal and let one element stand out—either your bag, shoes, or earrings.".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_notes_keep_their_wording() {
        assert_eq!(
            sample_recommendation().styling_notes,
            "Keep accessories minimal and let one element stand out—either your bag, shoes, or earrings."
        );
    }

    #[test]
    fn serde_decode_fills_missing_keys_with_defaults() {
        let rec: Recommendation =
            serde_json::from_str(r#"{"primary_outfit": {"title": "X"}, "additional_suggestions": [{}]}"#)
                .unwrap();
        assert_eq!(rec.primary_outfit.title, "X");
        assert_eq!(rec.primary_outfit.footwear, "");
        assert!(rec.primary_outfit.accessories.is_empty());
        assert_eq!(rec.additional_suggestions, vec![Alternative::default()]);
        assert_eq!(rec.styling_notes, "");
    }
}
