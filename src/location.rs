use crate::error::ResolveError;

/// Resolve a raw schema reference against the location of the document that
/// declares it.
///
/// References containing the scheme separator `//` are already absolute and
/// come back unchanged. Everything else is taken relative to the directory of
/// `base`, with each `../` consuming one trailing directory of the base path.
pub fn resolve_reference(reference: &str, base: &str) -> Result<String, ResolveError> {
    if reference.contains("//") {
        return Ok(reference.to_string());
    }

    let directory = parent(base);
    if !reference.contains("../") {
        return Ok(format!("{directory}/{reference}"));
    }

    collapse_ascents(reference, base, directory)
}

/// The directory portion of a location: everything before the final `/`, or
/// `.` for a bare file name.
fn parent(location: &str) -> &str {
    match location.rsplit_once('/') {
        Some((directory, _)) => directory,
        None => ".",
    }
}

/// Drop one trailing segment of the base directory per `../` occurrence and
/// reattach the rest of the reference, keeping the base scheme intact.
fn collapse_ascents(reference: &str, base: &str, directory: &str) -> Result<String, ResolveError> {
    let ascents = reference.matches("../").count();

    let (scheme, path) = match directory.find("://") {
        Some(at) => directory.split_at(at + "://".len()),
        None => ("", directory),
    };

    let segments: Vec<&str> = path.split('/').collect();
    if ascents >= segments.len() {
        return Err(ResolveError::MalformedReference {
            reference: reference.to_string(),
            base: base.to_string(),
        });
    }

    let kept = &segments[..segments.len() - ascents];
    let descent = reference.replace("../", "");
    Ok(format!("{scheme}{}/{descent}", kept.join("/")))
}
