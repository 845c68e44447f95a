//! URL path construction for declarative endpoints.

/// Build the concrete path for a group/endpoint pair.
///
/// The rule is `/api/<group>.<endpoint>`, followed by one `/:<name>` capture
/// segment per declared parameter, in declaration order. Names are used
/// verbatim: no case normalization, no escaping, and no collision detection.
/// Two endpoints mapping to the same path is a configuration bug surfaced by
/// the applier.
pub fn build_path(group: &str, endpoint: &str, with_params: &[String]) -> String {
    let mut path = format!("/api/{group}.{endpoint}");
    for param in with_params {
        path.push_str("/:");
        path.push_str(param);
    }
    path
}
