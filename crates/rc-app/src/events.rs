/// Outcomes broadcast to UI components after the app has applied a worker
/// response. Panels that keep local form state react here.
#[derive(Debug, Clone)]
pub enum AppEvent {
    SignedIn,
    RegisterSucceeded,
    AuthFailed(String),
}
