use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Param(String),
}

/// A route path pattern.
///
/// `/now` is a literal and matches only itself. `/user/<user_id>/profile`
/// is templated: it matches any three-segment path with `user` and
/// `profile` in place, binding the middle segment to `user_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    Literal(String),
    Template(Vec<Segment>),
}

impl Pattern {
    pub fn parse(pattern: &str) -> Self {
        let segments: Vec<Segment> = pattern.split('/').map(parse_segment).collect();

        if segments.iter().any(|s| matches!(s, Segment::Param(_))) {
            Pattern::Template(segments)
        } else {
            Pattern::Literal(pattern.to_string())
        }
    }

    /// Matches a request path, returning the bound parameters on success.
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        match self {
            Pattern::Literal(literal) => (literal == path).then(HashMap::new),
            Pattern::Template(segments) => {
                let parts: Vec<&str> = path.split('/').collect();
                if parts.len() != segments.len() {
                    return None;
                }

                let mut params = HashMap::new();
                for (segment, part) in segments.iter().zip(parts) {
                    match segment {
                        Segment::Literal(lit) if lit == part => {}
                        Segment::Literal(_) => return None,
                        Segment::Param(_) if part.is_empty() => return None,
                        Segment::Param(name) => {
                            params.insert(name.clone(), part.to_string());
                        }
                    }
                }
                Some(params)
            }
        }
    }
}

fn parse_segment(segment: &str) -> Segment {
    match segment
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
    {
        Some(name) if !name.is_empty() => Segment::Param(name.to_string()),
        _ => Segment::Literal(segment.to_string()),
    }
}
