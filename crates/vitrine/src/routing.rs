use rustc_hash::FxHashMap;

#[derive(Debug, PartialEq)]
pub struct ParameterDef {
    pub(crate) key: String,
    /// `[...key]` rest parameters capture every remaining path segment.
    pub(crate) rest: bool,
}

pub fn extract_params_from_raw_route(raw_route: &str) -> Vec<ParameterDef> {
    let mut params = Vec::new();
    let mut start = 0;

    while let Some(bracket_pos) = raw_route[start..].find('[') {
        let abs_pos = start + bracket_pos;

        // Check if escaped by counting preceding backslashes
        let backslash_count = raw_route[..abs_pos]
            .chars()
            .rev()
            .take_while(|&c| c == '\\')
            .count();

        if backslash_count % 2 == 1 {
            start = abs_pos + 1;
            continue;
        }

        if let Some(end_bracket) = raw_route[abs_pos + 1..].find(']') {
            let end_pos = abs_pos + 1 + end_bracket;
            let inner = &raw_route[abs_pos + 1..end_pos];

            let (key, rest) = match inner.strip_prefix("...") {
                Some(key) => (key, true),
                None => (inner, false),
            };

            params.push(ParameterDef {
                key: key.to_string(),
                rest,
            });

            start = end_pos + 1;
        } else {
            break;
        }
    }

    params
}

pub fn split_segments(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Matches a concrete request path against a route template, returning the
/// captured parameters. Rest parameters must be the last template segment and
/// capture at least one path segment.
pub fn match_path(template: &str, path: &str) -> Option<FxHashMap<String, Vec<String>>> {
    let template_segments: Vec<&str> = template
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();
    let path_segments = split_segments(path);

    let mut captures = FxHashMap::default();
    let mut cursor = 0;

    for (position, template_segment) in template_segments.iter().enumerate() {
        let params = extract_params_from_raw_route(template_segment);

        match params.first() {
            Some(param) if param.rest => {
                if position != template_segments.len() - 1 || cursor >= path_segments.len() {
                    return None;
                }

                captures.insert(param.key.clone(), path_segments[cursor..].to_vec());
                cursor = path_segments.len();
            }
            Some(param) => {
                let value = path_segments.get(cursor)?;
                captures.insert(param.key.clone(), vec![value.clone()]);
                cursor += 1;
            }
            None => {
                if path_segments.get(cursor).map(String::as_str) != Some(*template_segment) {
                    return None;
                }
                cursor += 1;
            }
        }
    }

    if cursor == path_segments.len() {
        Some(captures)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_params() {
        let input = "/articles/[article]";
        let expected = vec![ParameterDef {
            key: "article".to_string(),
            rest: false,
        }];

        assert_eq!(extract_params_from_raw_route(input), expected);
    }

    #[test]
    fn test_extract_params_rest() {
        let input = "/[...pages]";
        let expected = vec![ParameterDef {
            key: "pages".to_string(),
            rest: true,
        }];

        assert_eq!(extract_params_from_raw_route(input), expected);
    }

    #[test]
    fn test_extract_params_no_params() {
        let input = "/articles";
        let expected: Vec<ParameterDef> = Vec::new();

        assert_eq!(extract_params_from_raw_route(input), expected);
    }

    #[test]
    fn test_extract_params_escaped() {
        let input = "/articles/\\[article\\]";
        let expected: Vec<ParameterDef> = Vec::new();

        assert_eq!(extract_params_from_raw_route(input), expected);
    }

    #[test]
    fn test_split_segments() {
        assert_eq!(split_segments("/en/about"), vec!["en", "about"]);
        assert_eq!(split_segments("/en/about/"), vec!["en", "about"]);
        assert_eq!(split_segments("/"), Vec::<String>::new());
    }

    #[test]
    fn test_match_path_rest_captures_all_segments() {
        let captures = match_path("/[...pages]", "/en/legal/terms").unwrap();
        assert_eq!(
            captures.get("pages").unwrap(),
            &vec![
                "en".to_string(),
                "legal".to_string(),
                "terms".to_string()
            ]
        );
    }

    #[test]
    fn test_match_path_rest_requires_a_segment() {
        assert!(match_path("/[...pages]", "/").is_none());
    }

    #[test]
    fn test_match_path_single_param() {
        let captures = match_path("/articles/[slug]", "/articles/hello-world").unwrap();
        assert_eq!(
            captures.get("slug").unwrap(),
            &vec!["hello-world".to_string()]
        );
    }

    #[test]
    fn test_match_path_literal_mismatch() {
        assert!(match_path("/articles/[slug]", "/pages/hello-world").is_none());
    }

    #[test]
    fn test_match_path_leftover_segments() {
        assert!(match_path("/articles/[slug]", "/articles/a/b").is_none());
    }
}
