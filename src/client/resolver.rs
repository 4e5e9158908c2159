//! Single-shot completion of a creation request.

use crate::{CreateError, Translator};
use tokio::sync::oneshot;

/// Receives the outcome of one creation request.
///
/// Both methods consume the resolver, so at most one of them can ever run.
/// A resolver dropped without either call means the request was cancelled.
pub trait Resolver<H> {
    /// Hand over the created translator.
    fn resolve(self, translator: Translator<H>);

    /// Report why creation failed.
    fn reject(self, error: CreateError);
}

/// Resolver backed by a oneshot channel.
///
/// The receiving side sees `Err(RecvError)` when the request was cancelled.
impl<H> Resolver<H> for oneshot::Sender<Result<Translator<H>, CreateError>> {
    fn resolve(self, translator: Translator<H>) {
        // The caller may have stopped waiting.
        let _ = self.send(Ok(translator));
    }

    fn reject(self, error: CreateError) {
        let _ = self.send(Err(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(flavor = "current_thread")]
    async fn test_oneshot_resolve() {
        let (tx, rx) = oneshot::channel::<Result<Translator<u8>, CreateError>>();
        tx.resolve(Translator::new("en".to_string(), "it".to_string(), 3, None));

        let translator = rx.await.unwrap().unwrap();
        assert_eq!(translator.target_language(), "it");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_oneshot_reject() {
        let (tx, rx) = oneshot::channel::<Result<Translator<u8>, CreateError>>();
        tx.reject(CreateError::NotAllowed);

        assert_eq!(rx.await.unwrap().unwrap_err(), CreateError::NotAllowed);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_dropped_resolver_is_visible() {
        let (tx, rx) = oneshot::channel::<Result<Translator<u8>, CreateError>>();
        drop(tx);

        assert!(rx.await.is_err());
    }
}
