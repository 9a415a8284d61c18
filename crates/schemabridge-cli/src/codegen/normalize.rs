//! Type normalization: resolve named references to a structural shape.

use super::env::NamingEnvironment;
use schemabridge_core::{CodegenError, CodegenResult, SchemaType};
use tracing::trace;

/// Resolve `ty` through the declaration table until a structural type is reached.
///
/// Only the outermost named references are followed, so a record that refers
/// to itself through a field is never unfolded. With `unwrap_option`, any
/// `Option` reached on the way is stripped and its element normalized in turn.
/// A chain of aliases that loops back on itself is reported as
/// [`CodegenError::UnsupportedType`].
pub fn normalize<'a>(
    env: &'a NamingEnvironment,
    ty: &'a SchemaType,
    unwrap_option: bool,
) -> CodegenResult<&'a SchemaType> {
    let mut current = ty;
    let mut hops = 0usize;

    loop {
        match current {
            SchemaType::NamedRef { name } => {
                let entry = env.lookup(name)?;
                hops += 1;
                if hops > env.declaration_count() {
                    return Err(CodegenError::UnsupportedType(format!(
                        "cyclic type alias through {name}"
                    )));
                }
                trace!(name = %name, hops, "resolving named type");
                current = &entry.ty;
            }
            SchemaType::Option { elem } if unwrap_option => current = elem,
            _ => return Ok(current),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use schemabridge_core::{Declaration, Field, Variant};

    fn env_with(decls: Vec<Declaration>) -> NamingEnvironment {
        let mut env = NamingEnvironment::new("p", 2);
        for decl in &decls {
            env.declare(decl).unwrap();
        }
        env
    }

    #[test]
    fn normalize___primitive___is_unchanged() {
        let env = env_with(vec![]);
        let ty = SchemaType::int();

        assert_eq!(normalize(&env, &ty, false).unwrap(), &SchemaType::int());
    }

    #[test]
    fn normalize___alias_chain___resolves_to_structure() {
        let env = env_with(vec![
            Declaration::new("a", SchemaType::named("b")),
            Declaration::new("b", SchemaType::list(SchemaType::text())),
        ]);
        let ty = SchemaType::named("a");

        assert_eq!(
            normalize(&env, &ty, false).unwrap(),
            &SchemaType::list(SchemaType::text())
        );
    }

    #[test]
    fn normalize___option_without_unwrap___stays_option() {
        let env = env_with(vec![]);
        let ty = SchemaType::option(SchemaType::int());

        assert!(matches!(
            normalize(&env, &ty, false).unwrap(),
            SchemaType::Option { .. }
        ));
    }

    #[test]
    fn normalize___option_with_unwrap___returns_element() {
        let env = env_with(vec![Declaration::new("n", SchemaType::float())]);
        let ty = SchemaType::option(SchemaType::option(SchemaType::named("n")));

        assert_eq!(normalize(&env, &ty, true).unwrap(), &SchemaType::float());
    }

    #[test]
    fn normalize___self_referential_record___stops_at_record() {
        let tree = SchemaType::record(vec![
            Field::required("label", SchemaType::text()),
            Field::required("children", SchemaType::list(SchemaType::named("tree"))),
        ]);
        let env = env_with(vec![Declaration::new("tree", tree.clone())]);
        let ty = SchemaType::named("tree");

        assert_eq!(normalize(&env, &ty, false).unwrap(), &tree);
    }

    #[test]
    fn normalize___named_sum___returns_sum() {
        let env = env_with(vec![Declaration::new(
            "s",
            SchemaType::sum(vec![Variant::nullary("A")]),
        )]);
        let ty = SchemaType::named("s");

        assert!(matches!(
            normalize(&env, &ty, true).unwrap(),
            SchemaType::Sum { .. }
        ));
    }

    #[test]
    fn normalize___alias_cycle___returns_unsupported_type() {
        let env = env_with(vec![
            Declaration::new("a", SchemaType::named("b")),
            Declaration::new("b", SchemaType::named("a")),
        ]);
        let ty = SchemaType::named("a");

        let err = normalize(&env, &ty, false).unwrap_err();

        assert!(matches!(err, CodegenError::UnsupportedType(msg) if msg.contains("cyclic")));
    }

    #[test]
    fn normalize___unknown_name___returns_unresolved_name() {
        let env = env_with(vec![]);
        let ty = SchemaType::named("ghost");

        assert!(matches!(
            normalize(&env, &ty, false),
            Err(CodegenError::UnresolvedName(_))
        ));
    }

    #[test]
    fn normalize___alias_to_unknown_name___returns_unresolved_name() {
        let env = env_with(vec![Declaration::new("a", SchemaType::named("ghost"))]);
        let ty = SchemaType::named("a");

        let err = normalize(&env, &ty, false).unwrap_err();

        assert!(matches!(err, CodegenError::UnresolvedName(name) if name.contains("ghost")));
    }
}
