//! Purpose: JSON envelope for the `keygate decode` diagnostic command.
//! Exports: `decode_report_json`.
//! Role: Shape a `Verdict` into stable, machine-readable output.
//! Invariants: Key names are stable; `reason` appears only on rejection.
//! Invariants: `decoded` appears only when the prefix gates passed.
//! Invariants: Encode failures surface as `Internal` errors, never as a null report.

use bstr::BStr;
use keygate::api::{DecodedBuffer, Error, ErrorKind, Token, Variant, Verdict};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct DecodeReport {
    variant: &'static str,
    token: Option<String>,
    verdict: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<ReasonReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    decoded: Option<DecodedReport>,
}

#[derive(Serialize)]
struct ReasonReport {
    code: &'static str,
    message: String,
}

#[derive(Serialize)]
struct DecodedReport {
    bytes: Vec<u8>,
    text: String,
}

impl DecodedReport {
    fn from_buffer(buffer: &DecodedBuffer) -> Self {
        Self {
            bytes: buffer.as_bytes().to_vec(),
            text: BStr::new(buffer.as_c_str()).to_string(),
        }
    }
}

pub(crate) fn decode_report_json(
    variant: Variant,
    token: Option<&Token>,
    verdict: &Verdict,
) -> Result<Value, Error> {
    let reason = match verdict {
        Verdict::Accept { .. } => None,
        Verdict::Reject(rejection) => Some(ReasonReport {
            code: rejection.code(),
            message: rejection.to_string(),
        }),
    };
    let report = DecodeReport {
        variant: variant.name(),
        token: token.map(|token| BStr::new(token.as_bytes()).to_string()),
        verdict: if verdict.is_accept() {
            "accept"
        } else {
            "reject"
        },
        reason,
        decoded: verdict.decoded().map(DecodedReport::from_buffer),
    };
    serde_json::to_value(report).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("failed to encode decode report")
            .with_source(err)
    })
}

#[cfg(test)]
mod tests {
    use super::decode_report_json;
    use keygate::api::{Token, Variant, check};

    #[test]
    fn accept_report_has_decoded_text() {
        let token = Token::new(b"00101108097098101114101".to_vec());
        let verdict = check(Variant::Level2, Some(&token));
        let value = decode_report_json(Variant::Level2, Some(&token), &verdict).expect("report");
        assert_eq!(value["variant"], "level2");
        assert_eq!(value["verdict"], "accept");
        assert_eq!(value["decoded"]["text"], "delabere");
        assert_eq!(value["decoded"]["bytes"][0], 100);
        assert!(value.get("reason").is_none());
    }

    #[test]
    fn prefix_rejection_omits_decoded() {
        let token = Token::new(b"01".to_vec());
        let verdict = check(Variant::Level2, Some(&token));
        let value = decode_report_json(Variant::Level2, Some(&token), &verdict).expect("report");
        assert_eq!(value["verdict"], "reject");
        assert_eq!(value["reason"]["code"], "prefix_mismatch");
        assert!(value.get("decoded").is_none());
    }

    #[test]
    fn missing_token_is_null() {
        let verdict = check(Variant::Level3, None);
        let value = decode_report_json(Variant::Level3, None, &verdict).expect("report");
        assert!(value["token"].is_null());
        assert_eq!(value["reason"]["code"], "input_read");
    }

    #[test]
    fn non_utf8_token_still_encodes() {
        let token = Token::new(b"00\xff\xfe".to_vec());
        let verdict = check(Variant::Level2, Some(&token));
        let value = decode_report_json(Variant::Level2, Some(&token), &verdict).expect("report");
        let text = value["token"].as_str().expect("token text");
        assert!(text.starts_with("00"));
        assert!(text.contains('\u{fffd}'));
    }
}
