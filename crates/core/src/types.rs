/// Presentation identifiers are opaque server-assigned strings
/// (UUIDs today, but the client never inspects them).
pub type PresentationId = String;
