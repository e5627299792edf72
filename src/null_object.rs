/// Response of [NullCollaborator::request].
pub const EMPTY_RESPONSE: &str = "<empty>";

/// The interface for the client's collaborator. A null variant can stand in
/// for a real one wherever the client only depends on this trait.
pub trait Collaborator {
    fn request(&self) -> String;
}

/// A collaborator whose instances provide the useful behavior the client
/// expects.
pub struct RealCollaborator {
    payload: String,
}

impl RealCollaborator {
    pub fn new<S: Into<String>>(payload: S) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl Collaborator for RealCollaborator {
    fn request(&self) -> String {
        self.payload.clone()
    }
}

/// A do-nothing collaborator. Its request answers a fixed sentinel so the
/// client never needs a presence check.
pub struct NullCollaborator;

impl Collaborator for NullCollaborator {
    fn request(&self) -> String {
        EMPTY_RESPONSE.to_owned()
    }
}

/// Picks the real collaborator when one is available, the null one otherwise.
/// The choice is made once, at construction time.
pub fn collaborator(payload: Option<String>) -> Box<dyn Collaborator> {
    match payload {
        Some(p) => Box::new(RealCollaborator::new(p)),
        None => Box::new(NullCollaborator),
    }
}
