use super::{example_credential, example_request, example_time, query_pairs};
use anyhow::Result;
use pretty_assertions::assert_eq;
use presign_aws_s3::{signed_s3_url_at, Credential, SigningRequest, EXPIRES_IN_SECONDS};
use presign_core::time::parse_rfc3339;
use presign_core::ErrorKind;
use test_case::test_case;

fn is_lower_hex(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

fn requests() -> Vec<SigningRequest> {
    vec![
        example_request(),
        example_request().with_domain("digitaloceanspaces.com"),
        SigningRequest::new(
            "my.dotted.bucket",
            "/nested/path/to/object.tar.gz",
            "ap-northeast-1",
            &example_credential(),
        ),
        SigningRequest::new(
            "zz-last",
            "/a",
            "eu-central-1",
            &Credential::new("AAAA/with+odd=chars", "secret"),
        ),
    ]
}

#[test]
fn test_structure() -> Result<()> {
    let time = parse_rfc3339("2024-02-29T23:59:59Z")?;

    for req in requests() {
        let url = signed_s3_url_at(&req, time)?;
        let expected_prefix = format!("https://{}{}?", req.host(), req.object_key);

        assert!(url.starts_with("https://"), "{url}");
        assert!(url.starts_with(&expected_prefix), "{url}");
        assert_eq!(url.matches("X-Amz-Signature=").count(), 1, "{url}");
        assert!(
            url.contains(&format!("&X-Amz-Expires={EXPIRES_IN_SECONDS}&")),
            "{url}"
        );

        let (_, signature) = url
            .rsplit_once("&X-Amz-Signature=")
            .expect("signature must be last");
        assert_eq!(signature.len(), 64, "{url}");
        assert!(is_lower_hex(signature), "{url}");
    }
    Ok(())
}

#[test]
fn test_parameter_order() -> Result<()> {
    let time = parse_rfc3339("2024-02-29T23:59:59Z")?;

    for req in requests() {
        let url = signed_s3_url_at(&req, time)?;
        let names: Vec<_> = query_pairs(&url).into_iter().map(|(k, _)| k).collect();

        assert_eq!(
            names,
            [
                "X-Amz-Algorithm",
                "X-Amz-Credential",
                "X-Amz-Date",
                "X-Amz-Expires",
                "X-Amz-SignedHeaders",
                "X-Amz-Signature",
            ]
        );
    }
    Ok(())
}

#[test]
fn test_credential_roundtrips_through_query() -> Result<()> {
    let req = SigningRequest::new(
        "bucket",
        "/key",
        "us-west-2",
        &Credential::new("AAAA/with+odd=chars", "secret"),
    );
    let url = signed_s3_url_at(&req, example_time())?;
    let pairs = query_pairs(&url);

    assert_eq!(pairs[1].0, "X-Amz-Credential");
    assert_eq!(
        pairs[1].1,
        "AAAA/with+odd=chars/20130524/us-west-2/s3/aws4_request"
    );
    assert_eq!(pairs[2].1, "20130524T000000Z");
    Ok(())
}

#[test]
fn test_signature_depends_on_inputs() -> Result<()> {
    let base = signed_s3_url_at(&example_request(), example_time())?;

    let mut other = example_request();
    other.object_key = "/test2.txt".to_string();
    assert_ne!(
        query_pairs(&base)[5],
        query_pairs(&signed_s3_url_at(&other, example_time())?)[5]
    );

    let later = parse_rfc3339("2013-05-24T00:00:01Z")?;
    assert_ne!(base, signed_s3_url_at(&example_request(), later)?);
    Ok(())
}

#[test]
fn test_concurrent_signing_is_consistent() -> Result<()> {
    let expected = signed_s3_url_at(&example_request(), example_time())?;

    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| signed_s3_url_at(&example_request(), example_time())))
        .collect();

    for h in handles {
        let url = h.join().expect("thread must not panic")?;
        assert_eq!(url, expected);
    }
    Ok(())
}

#[test_case("", "/key", "us-east-1", "ak", "sk", ErrorKind::RequestInvalid; "empty bucket")]
#[test_case("bucket", "key", "us-east-1", "ak", "sk", ErrorKind::RequestInvalid; "relative key")]
#[test_case("bucket", "/key", "", "ak", "sk", ErrorKind::ConfigInvalid; "empty region")]
#[test_case("bucket", "/key", "us-east-1", "", "sk", ErrorKind::CredentialInvalid; "empty access key")]
#[test_case("bucket", "/key", "us-east-1", "ak", "", ErrorKind::CredentialInvalid; "empty secret")]
fn test_precondition_violations(
    bucket: &str,
    key: &str,
    region: &str,
    ak: &str,
    sk: &str,
    kind: ErrorKind,
) {
    let req = SigningRequest::new(bucket, key, region, &Credential::new(ak, sk));

    let err = signed_s3_url_at(&req, example_time()).expect_err("request must be rejected");
    assert_eq!(err.kind(), kind);
}
