use async_trait::async_trait;
use strum::{Display, EnumString, IntoStaticStr};

use crate::error::ProductResult;

/// Change events emitted after a successful store write.
///
/// The string form is the topic (NATS subject) the event is published on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
pub enum ProductEvent {
    /// Payload: the full product as JSON
    #[strum(serialize = "product.created")]
    Created,
    /// Payload: the full product as JSON
    #[strum(serialize = "product.updated")]
    Updated,
    /// Payload: the product id as a JSON string
    #[strum(serialize = "product.deleted")]
    Deleted,
}

impl ProductEvent {
    pub fn topic(self) -> &'static str {
        self.into()
    }
}

/// Fire-and-forget event sink. Callers never retry or queue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, topic: &str, payload: Vec<u8>) -> ProductResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_topics_match_string_form() {
        assert_eq!(ProductEvent::Created.topic(), "product.created");
        assert_eq!(ProductEvent::Updated.topic(), "product.updated");
        assert_eq!(ProductEvent::Deleted.topic(), "product.deleted");

        for event in [ProductEvent::Created, ProductEvent::Updated, ProductEvent::Deleted] {
            assert_eq!(event.to_string(), event.topic());
            assert_eq!(ProductEvent::from_str(event.topic()).unwrap(), event);
        }
    }
}
