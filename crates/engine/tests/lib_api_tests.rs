mod common;

use que_pin as qp;

#[test]
fn every_builtin_root_is_trusted_in_both_forms() {
    for (name, hex) in qp::roots::BUILTIN_ROOTS {
        assert!(qp::is_trusted_hex(hex), "{name} rejected via hex");
        assert!(qp::is_trusted_bytes(&common::decode_hex(hex)), "{name} rejected via bytes");
    }
}

#[test]
fn digicert_global_root_ca_last_byte_altered_is_rejected() {
    let mut key = common::decode_hex(common::digicert_global_root_ca_hex());
    assert!(qp::is_trusted_bytes(&key));

    let last = key.len() - 1;
    key[last] ^= 0x01;
    assert!(!qp::is_trusted_bytes(&key));
    assert!(!qp::is_trusted_hex(&qp::canonical_hex(&key)));
}

#[test]
fn empty_input_is_never_trusted() {
    assert!(!qp::is_trusted_hex(""));
    assert!(!qp::is_trusted_bytes(&[]));
    assert!(!qp::check_root_key(&[]).is_allowed());
}

#[test]
fn hex_query_is_case_sensitive_bytes_query_is_not() {
    let canonical = common::digicert_global_root_ca_hex();
    let lower = canonical.to_ascii_lowercase();

    assert!(!qp::is_trusted_hex(&lower));
    assert!(qp::is_trusted_bytes(&common::decode_hex(&lower)));
}

#[test]
fn hex_query_does_not_strip_prefix_or_separators() {
    let canonical = common::digicert_global_root_ca_hex();
    assert!(!qp::is_trusted_hex(&format!("0x{canonical}")));
    assert!(!qp::is_trusted_hex(&format!(" {canonical}")));
    assert!(!qp::is_trusted_hex(&format!("{canonical}\n")));

    let separated: Vec<String> = canonical
        .as_bytes()
        .chunks(2)
        .map(|pair| String::from_utf8_lossy(pair).into_owned())
        .collect();
    assert!(!qp::is_trusted_hex(&separated.join(":")));
}

#[test]
fn byte_and_hex_queries_agree() {
    let mut samples: Vec<Vec<u8>> = vec![
        vec![],
        vec![0x00],
        vec![0x04],
        vec![0x30, 0x82, 0x01, 0x0A],
        common::generate_p256_public_key(),
    ];
    samples.extend(
        qp::roots::BUILTIN_ROOTS
            .iter()
            .map(|(_, hex)| common::decode_hex(hex)),
    );
    let mut truncated = common::decode_hex(common::digicert_global_root_ca_hex());
    truncated.pop();
    samples.push(truncated);

    for bytes in &samples {
        assert_eq!(
            qp::is_trusted_bytes(bytes),
            qp::is_trusted_hex(&qp::canonical_hex(bytes)),
        );
    }
}

#[test]
fn generated_keys_are_rejected() {
    for _ in 0..4 {
        let key = common::generate_p256_public_key();
        assert!(!qp::is_trusted_bytes(&key));
        let check = qp::check_root_key(&key);
        assert_eq!(check.verdict, qp::Verdict::Rejected);
        assert_eq!(check.encoding, qp::KeyEncoding::EcPoint);
    }
}

#[test]
fn repeated_queries_are_stable() {
    let key = common::decode_hex(common::builtin_root_hex("Entrust Root Certification Authority - EC1"));
    let foreign = common::generate_p256_public_key();
    for _ in 0..100 {
        assert!(qp::is_trusted_bytes(&key));
        assert!(!qp::is_trusted_bytes(&foreign));
    }
}

#[test]
fn check_root_key_names_the_matched_root() {
    let key = common::decode_hex(common::builtin_root_hex("Amazon Root CA 1"));
    let check = qp::check_root_key(&key);
    assert!(check.is_allowed());
    assert_eq!(check.root_name.as_deref(), Some("Amazon Root CA 1"));
    assert_eq!(check.encoding, qp::KeyEncoding::Rsa);

    let json = serde_json::to_value(&check).unwrap();
    assert_eq!(json["verdict"], "Allowed");
    assert_eq!(json["root_name"], "Amazon Root CA 1");
}

#[test]
fn concurrent_readers_see_the_same_registry() {
    let key = common::decode_hex(common::digicert_global_root_ca_hex());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let key = key.clone();
            std::thread::spawn(move || (qp::is_trusted_bytes(&key), qp::builtin_registry().len()))
        })
        .collect();
    for h in handles {
        let (trusted, len) = h.join().unwrap();
        assert!(trusted);
        assert_eq!(len, qp::roots::BUILTIN_ROOTS.len());
    }
}
