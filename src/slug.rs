//! Slug derivation for catalog entities.
//!
//! Display names are mostly Russian, so slugification transliterates
//! Cyrillic to Latin before the usual lowercase/hyphenation pass.

use rand::{distributions::Alphanumeric, Rng};

/// Transliterate a single Cyrillic character. Returns `None` for
/// non-Cyrillic input, and an empty string for the signs that carry no
/// Latin sound, so callers can tell "drop" apart from "separator".
fn transliterate(c: char) -> Option<&'static str> {
    let tr = match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' | 'ё' | 'э' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' | 'й' => "i",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sch",
        'ъ' | 'ь' => "",
        'ы' => "y",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(tr)
}

/// Derive a URL-safe slug from a display name.
///
/// Lowercases, transliterates Cyrillic, and collapses every run of other
/// non-ASCII-alphanumeric characters into a single hyphen. The result has
/// no leading or trailing hyphen and may be empty for degenerate input.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());

    for c in name.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
        } else if let Some(tr) = transliterate(c) {
            out.push_str(tr);
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
        }
    }

    out.trim_matches('-').to_string()
}

/// Length of the random suffix appended to commercial slugs.
const SUFFIX_LEN: usize = 6;

/// Derive a collision-resistant slug: normalized name plus a short random
/// suffix, so creation never needs a uniqueness retry loop.
pub fn unique_slug(name: &str) -> String {
    let base = slugify(name);
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect();

    if base.is_empty() {
        suffix
    } else {
        format!("{}-{}", base, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_well_formed(slug: &str) -> bool {
        !slug.starts_with('-')
            && !slug.ends_with('-')
            && !slug.contains("--")
            && slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Walking Tours"), "walking-tours");
        assert_eq!(slugify("  City -- Center  "), "city-center");
    }

    #[test]
    fn slugify_transliterates_cyrillic() {
        assert_eq!(slugify("Пешие туры"), "peshie-tury");
        assert_eq!(slugify("Тур по Кремлю"), "tur-po-kremlyu");
        assert_eq!(slugify("Экскурсия"), "ekskursiya");
    }

    #[test]
    fn slugify_drops_soft_and_hard_signs() {
        // The signs vanish without splitting the word
        assert_eq!(slugify("Большой театр"), "bolshoi-teatr");
        assert_eq!(slugify("Объезд"), "obezd");
    }

    #[test]
    fn slugify_output_is_well_formed() {
        for name in [
            "Пешие туры",
            "!!!",
            "a   b",
            "-lead-and-trail-",
            "Речные прогулки 2024",
            "",
        ] {
            let slug = slugify(name);
            assert!(is_well_formed(&slug), "bad slug {:?} from {:?}", slug, name);
        }
    }

    #[test]
    fn slugify_degenerate_input_is_empty() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("   "), "");
    }

    #[test]
    fn unique_slug_appends_six_char_suffix() {
        let slug = unique_slug("Тур по Кремлю");
        let suffix = slug.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), 6);
        assert!(slug.starts_with("tur-po-kremlyu-"));
        assert!(is_well_formed(&slug));
    }

    #[test]
    fn unique_slug_survives_degenerate_name() {
        let slug = unique_slug("!!!");
        assert_eq!(slug.len(), 6);
        assert!(is_well_formed(&slug));
    }

    #[test]
    fn unique_slugs_differ() {
        assert_ne!(unique_slug("Тур"), unique_slug("Тур"));
    }
}
