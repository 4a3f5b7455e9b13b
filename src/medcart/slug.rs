//! URL-friendly slugs for medicine records.
//!
//! The catalog carries Turkish brand and ingredient names; slugs transliterate
//! the Turkish characters explicitly before the usual lowercase/dash folding,
//! so `İLAÇ` and `ilac` address the same record.

use crate::model::Medicine;

/// Turns free text into a lowercase, dash-separated slug.
///
/// Turkish characters are mapped to their ASCII counterparts, every other
/// non-alphanumeric run collapses to a single `-`, and leading/trailing
/// dashes are dropped.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut last_was_dash = true; // suppress a leading dash

    for c in text.chars() {
        let mapped = match c {
            'ğ' | 'Ğ' => Some('g'),
            'ü' | 'Ü' => Some('u'),
            'ş' | 'Ş' => Some('s'),
            'ı' | 'İ' => Some('i'),
            'ö' | 'Ö' => Some('o'),
            'ç' | 'Ç' => Some('c'),
            c if c.is_ascii_alphanumeric() => Some(c.to_ascii_lowercase()),
            _ => None,
        };

        match mapped {
            Some(c) => {
                slug.push(c);
                last_was_dash = false;
            }
            None => {
                if !last_was_dash {
                    slug.push('-');
                    last_was_dash = true;
                }
            }
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// The canonical two-segment slug for a medicine:
/// `active-ingredient-slug/brand-slug`.
pub fn medicine_slug(medicine: &Medicine) -> String {
    format!(
        "{}/{}",
        slugify(&medicine.active_ingredient),
        slugify(&medicine.name)
    )
}

/// Splits a two-segment slug into (active ingredient, brand). A slug without
/// a `/` is treated as a bare brand slug with an empty ingredient part.
pub fn split_slug(slug: &str) -> (&str, &str) {
    match slug.split_once('/') {
        Some((ingredient, brand)) => (ingredient, brand),
        None => ("", slug),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_turkish_characters() {
        assert_eq!(slugify("Ağrı Kesici İlaç"), "agri-kesici-ilac");
        assert_eq!(slugify("ÖKSÜRÜK ŞURUBU"), "oksuruk-surubu");
    }

    #[test]
    fn collapses_and_trims_dashes() {
        assert_eq!(slugify("  500 MG / 20  TABLETS  "), "500-mg-20-tablets");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn medicine_slug_is_two_segments() {
        let medicine = Medicine {
            id: 1,
            name: "Parol".into(),
            active_ingredient: "Parasetamol".into(),
            active_ingredient_description: None,
            packaging: None,
            manufacturer: None,
            country: None,
            category: None,
        };
        assert_eq!(medicine_slug(&medicine), "parasetamol/parol");
        assert_eq!(split_slug("parasetamol/parol"), ("parasetamol", "parol"));
        assert_eq!(split_slug("parol"), ("", "parol"));
    }
}
