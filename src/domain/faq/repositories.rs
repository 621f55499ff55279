use futures::future::LocalBoxFuture;

use super::value_objects::{AnswerOutcome, Question};
use crate::domain::errors::InfrastructureError;

/// Interface to a hosted generative-text model
pub trait GenerativeTextClient {
    /// Ask one question. Transport and HTTP failures are errors;
    /// a response without usable text is an `AnswerOutcome::Unanswered`.
    fn ask<'a>(&'a self, question: &'a Question) -> LocalBoxFuture<'a, Result<AnswerOutcome, InfrastructureError>>;
}
