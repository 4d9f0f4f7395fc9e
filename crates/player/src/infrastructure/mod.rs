//! Infrastructure adapters for the outbound ports

pub mod http_client;
pub mod notifier;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use http_client::ApiAdapter;
pub use notifier::TracingNotifier;

/// Spawn a UI-scoped task on the Dioxus runtime.
///
/// The task is dropped with the component that spawned it, which is what
/// cancels in-flight work when a view goes away.
pub fn spawn_task<F>(future: F) -> dioxus::core::Task
where
    F: std::future::Future<Output = ()> + 'static,
{
    dioxus::prelude::spawn(future)
}
