use beautygpt_model::{ChatReply, ErrorKind};

use crate::Error;

/// Decodes the body of a successful response.
pub(crate) fn decode_reply(body: &[u8]) -> Result<ChatReply, Error> {
    serde_json::from_slice(body).map_err(|err| {
        Error::new(format!("cannot decode reply: {err}"), ErrorKind::Malformed)
    })
}

#[cfg(test)]
mod tests {
    use beautygpt_model::ProviderError;

    use super::*;

    #[test]
    fn test_decode_reply() {
        let body = br#"{
            "response": "Ti consiglio un siero.",
            "products": [{
                "id": 2,
                "name": "C-Firma",
                "brand": "Drunk Elephant",
                "category": "serum",
                "price": 29.99,
                "amazon_url": "https://example.com/c-firma",
                "image_url": "https://example.com/c-firma.jpg",
                "skin_types": ["tutti"],
                "benefits": ["luminosita"],
                "description": "Vitamina C"
            }]
        }"#;
        let reply = decode_reply(body).unwrap();
        assert_eq!(reply.response, "Ti consiglio un siero.");
        assert_eq!(reply.products.len(), 1);
        assert_eq!(reply.products[0].price, 29.99);
    }

    #[test]
    fn test_products_omitted() {
        let reply = decode_reply(br#"{ "response": "Ciao" }"#).unwrap();
        assert!(reply.products.is_empty());
    }

    #[test]
    fn test_bad_body() {
        let err = decode_reply(b"{ \"detail\": 1 }").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Malformed);

        let err = decode_reply(b"<html></html>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Malformed);

        let err = decode_reply(b"").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Malformed);
    }
}
