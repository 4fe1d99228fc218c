/// Derives a URL-safe identifier from a human-readable product name.
///
/// Empty input yields the fixed fallback `"default-name"`. Otherwise the
/// name is lowercased, the nine Hungarian accented vowels are folded to
/// their ASCII counterparts, every character outside `[a-z0-9 -]` is
/// dropped, and each run of spaces and hyphens collapses into a single
/// hyphen. Leading and trailing separator runs collapse the same way, so a
/// padded name keeps its boundary hyphens (`" Alma "` becomes `"-alma-"`).
///
/// Total over its input domain and deterministic; the output always matches
/// `^[a-z0-9-]*$` or equals the fallback.
pub fn slugify(name: &str) -> String {
    if name.is_empty() {
        return "default-name".to_string();
    }

    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.to_lowercase().chars() {
        let c = match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' | 'ö' | 'ő' => 'o',
            'ú' | 'ü' | 'ű' => 'u',
            other => other,
        };

        match c {
            'a'..='z' | '0'..='9' => {
                if pending_separator {
                    slug.push('-');
                    pending_separator = false;
                }
                slug.push(c);
            }
            ' ' | '-' => pending_separator = true,
            // anything else is dropped without acting as a separator
            _ => {}
        }
    }

    // a trailing separator run still produces its hyphen
    if pending_separator {
        slug.push('-');
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_falls_back() {
        assert_eq!(slugify(""), "default-name");
    }

    #[test]
    fn boundary_separator_runs_become_hyphens() {
        assert_eq!(slugify(" Alma "), "-alma-");
        assert_eq!(slugify("   "), "-");
        assert_eq!(slugify("--körte"), "-korte");
    }

    #[test]
    fn folds_hungarian_vowels() {
        assert_eq!(slugify("Görögdinnye Tál"), "gorogdinnye-tal");
        assert_eq!(slugify("árvíztűrő tükörfúrógép"), "arvizturo-tukorfurogep");
    }

    #[test]
    fn strips_punctuation_and_collapses_separators() {
        assert_eq!(slugify("Friss   alma!!"), "friss-alma");
        assert_eq!(slugify("alma - -  körte"), "alma-korte");
        assert_eq!(slugify("100% bio (zöldség)"), "100-bio-zoldseg");
    }

    #[test]
    fn uppercase_accents_fold_too() {
        assert_eq!(slugify("ÉDES Paprika"), "edes-paprika");
    }

    #[test]
    fn idempotent_on_its_own_output() {
        for name in [" Görögdinnye Tál ", "alma", "Friss   alma!!", "b-52", "   "] {
            let once = slugify(name);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn output_alphabet_is_restricted() {
        for name in ["", "Árvíztűrő!", "  ---  ", "パン", "a b c", "x_y.z"] {
            let slug = slugify(name);
            assert!(
                slug == "default-name"
                    || slug
                        .chars()
                        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "unexpected slug {slug:?} for {name:?}"
            );
        }
    }
}
