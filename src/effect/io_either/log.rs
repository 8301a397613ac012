//! JSON logging for `IOEither`.

use serde::Serialize;

use super::IOEither;
use crate::control::Either;
use crate::error::Error;

impl<A: Serialize + 'static> IOEither<Error, A> {
    /// Serialises a successful value to JSON and emits it as a `tracing`
    /// info event, keeping the value.
    ///
    /// Fails with [`Error::Serialization`] when the value cannot be
    /// serialised; a `Left` passes through without logging.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcomb::{control::Either, effect::IOEither, Error};
    ///
    /// let logged = IOEither::<Error, _>::right(vec![1, 2, 3]).log_json("ids");
    /// assert_eq!(logged.run_unsafe(), Either::Right(vec![1, 2, 3]));
    /// ```
    pub fn log_json(self, label: &'static str) -> Self {
        self.chain_either_k(move |value| match serde_json::to_string(&value) {
            Ok(json) => {
                tracing::info!(label, json = %json, "io either value");
                Either::Right(value)
            }
            Err(error) => Either::Left(Error::from(error)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;
    use tracing_test::traced_test;

    #[rstest]
    #[traced_test]
    fn logs_serialised_value() {
        let logged = IOEither::<Error, _>::right(HashMap::from([("port", 8080)])).log_json("config");
        assert!(logged.run_unsafe().is_right());
        assert!(logs_contain(r#"{"port":8080}"#));
    }

    #[rstest]
    fn unserialisable_value_fails() {
        let keyed_by_tuple = HashMap::from([((1, 2), "pair")]);
        let logged = IOEither::<Error, _>::right(keyed_by_tuple).log_json("bad");
        assert!(matches!(logged.run_unsafe(), Either::Left(Error::Serialization(_))));
    }
}
