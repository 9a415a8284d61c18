//! Runtime support types shared by every generated class.
//!
//! Templates are written with two-space indentation and re-indented to the
//! configured width. `$SERIALIZABLE`, `$UTIL` and `$INVALID_TAG` are replaced
//! with the names reserved in the [`NamingEnvironment`].

use super::artifact::{ArtifactKind, ClassArtifact, GeneratedClass, Member};
use super::env::NamingEnvironment;

const SERIALIZABLE_TEMPLATE: &str = r#"/**
 * Implemented by every generated type that can be written as JSON text.
 */
public interface $SERIALIZABLE {
  void toJsonBuffer(StringBuilder _out);

  default String toJson() {
    StringBuilder _out = new StringBuilder();
    toJsonBuffer(_out);
    return _out.toString();
  }
}
"#;

const UTIL_TEMPLATE: &str = r#"public final class $UTIL {
  private $UTIL() {
  }

  /**
   * Escape {@code s} for use inside a JSON string literal.
   */
  public static String escape(String _s) {
    StringBuilder _b = new StringBuilder(_s.length() + 8);
    for (int _i = 0; _i < _s.length(); ++_i) {
      char _c = _s.charAt(_i);
      if (_c == '"') {
        _b.append("\\\"");
      } else if (_c == '\\') {
        _b.append("\\\\");
      } else if (_c == '\n') {
        _b.append("\\n");
      } else if (_c == '\r') {
        _b.append("\\r");
      } else if (_c == '\t') {
        _b.append("\\t");
      } else if (_c == '\b') {
        _b.append("\\b");
      } else if (_c == '\f') {
        _b.append("\\f");
      } else if (_c < 0x20) {
        _b.append(String.format("\\u%04x", (int) _c));
      } else {
        _b.append(_c);
      }
    }
    return _b.toString();
  }

  /**
   * JSON text of {@code d}; JSON has no NaN or infinities.
   */
  public static String number(double _d) {
    if (Double.isNaN(_d) || Double.isInfinite(_d)) {
      throw new JSONException("JSON does not allow non-finite numbers");
    }
    return String.valueOf(_d);
  }
}
"#;

const INVALID_TAG_TEMPLATE: &str = r#"/**
 * Thrown when a sum factory meets a tag matching none of its variants.
 */
public class $INVALID_TAG extends JSONException {
  public final String tag;

  public $INVALID_TAG(String tag) {
    super("Invalid tag: " + tag);
    this.tag = tag;
  }
}
"#;

/// The support interface, utility class and exception, in emission order
pub fn support_classes(env: &NamingEnvironment) -> Vec<GeneratedClass> {
    let names = env.support();
    let fill = |template: &str| {
        reindent(
            &template
                .replace("$SERIALIZABLE", &names.serializable)
                .replace("$UTIL", &names.util)
                .replace("$INVALID_TAG", &names.invalid_tag),
            env.indent_unit(),
        )
    };

    vec![
        GeneratedClass::new(
            ClassArtifact::new(&names.serializable, ArtifactKind::Interface),
            fill(SERIALIZABLE_TEMPLATE),
        ),
        GeneratedClass::new(
            ClassArtifact::new(&names.util, ArtifactKind::Class),
            fill(UTIL_TEMPLATE),
        ),
        GeneratedClass::new(
            ClassArtifact::new(&names.invalid_tag, ArtifactKind::Class)
                .with_members(vec![Member::new("tag", "String")]),
            fill(INVALID_TAG_TEMPLATE),
        ),
    ]
}

/// Replace each leading pair of spaces with `unit`
fn reindent(text: &str, unit: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        let trimmed = line.trim_start_matches(' ');
        let spaces = line.len() - trimmed.len();
        out.push_str(&unit.repeat(spaces / 2));
        out.push_str(&" ".repeat(spaces % 2));
        out.push_str(trimmed);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn support_classes___use_reserved_names() {
        let env = NamingEnvironment::new("p", 2);

        let classes = support_classes(&env);

        let names: Vec<&str> = classes.iter().map(|c| c.artifact.name.as_str()).collect();
        assert_eq!(names, vec!["JsonSerializable", "Util", "InvalidTagException"]);
        assert!(classes[0].body.contains("public interface JsonSerializable {"));
        assert!(classes[2].body.contains("public class InvalidTagException extends JSONException {"));
        assert!(classes[2].body.contains("super(\"Invalid tag: \" + tag);"));
    }

    #[test]
    fn support_classes___escape_covers_quotes_and_controls() {
        let env = NamingEnvironment::new("p", 2);

        let util = &support_classes(&env)[1].body;

        assert!(util.contains(r#"_b.append("\\\"");"#));
        assert!(util.contains(r#"_b.append(String.format("\\u%04x", (int) _c));"#));
    }

    #[test]
    fn support_classes___number_rejects_non_finite() {
        let env = NamingEnvironment::new("p", 2);

        let util = &support_classes(&env)[1].body;

        assert!(util.contains("public static String number(double _d) {"));
        assert!(util.contains("if (Double.isNaN(_d) || Double.isInfinite(_d)) {"));
        assert!(util.contains("throw new JSONException("));
    }

    #[test]
    fn reindent___widens_to_unit() {
        assert_eq!(reindent("a\n  b\n    c\n", "    "), "a\n    b\n        c\n");
    }

    #[test]
    fn reindent___keeps_javadoc_star_alignment() {
        assert_eq!(reindent("/**\n * x\n */\n", "    "), "/**\n * x\n */\n");
    }
}
