//! Diff rendering for fixture comparison.

/// Render a text diff between expected and actual output.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    if expected == actual {
        return String::from("[identical]");
    }

    let mut out = String::new();
    out.push_str("--- expected\n");
    out.push_str("+++ actual\n");
    let expected_lines: Vec<&str> = expected.lines().collect();
    let actual_lines: Vec<&str> = actual.lines().collect();
    let rows = expected_lines.len().max(actual_lines.len());
    for i in 0..rows {
        let e = expected_lines.get(i).copied();
        let a = actual_lines.get(i).copied();
        if e != a {
            out.push_str(&format!("@@ line {} @@\n", i + 1));
            if let Some(e) = e {
                out.push_str(&format!("-{e}\n"));
            }
            if let Some(a) = a {
                out.push_str(&format!("+{a}\n"));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs() {
        assert_eq!(render_diff("::1", "::1"), "[identical]");
    }

    #[test]
    fn single_line_mismatch() {
        let d = render_diff("2001:db8::1", "2001:db8:0:0:0:0:0:1");
        assert!(d.contains("@@ line 1 @@"));
        assert!(d.contains("-2001:db8::1"));
        assert!(d.contains("+2001:db8:0:0:0:0:0:1"));
    }

    #[test]
    fn extra_actual_lines_are_reported() {
        let d = render_diff("a", "a\nb");
        assert!(d.contains("@@ line 2 @@"));
        assert!(d.contains("+b"));
    }
}
