use crate::store::QuoteStore;

#[derive(Clone)]
pub struct AppState {
    pub store: QuoteStore,
}
