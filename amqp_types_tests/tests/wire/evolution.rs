use amqp_types::serde::{CodecErr, DescribedList, Descriptor, ListFraming, ListHeader, SchemaErr};
use amqp_types::types::{Composite, Header, MessageId, Properties};
use amqp_types::DecodeOpts;
use anyhow::Result;
use bytes::{BufMut, BytesMut};
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

/// An older peer knows fewer fields. Whatever it transmits is a prefix of ours.
pub fn test_older_peer() -> Result<()> {
    let mut rng = rand::thread_rng();

    let full = Properties {
        message_id: Some(MessageId::Ulong(rng.gen())),
        to: Some(String::from("/topic")),
        subject: Some(String::from("s")),
        group_sequence: Some(rng.gen()),
        ..Default::default()
    };
    let buf = full.encode_solo();

    let mut counts = (0..=full.encoded_count()).collect::<Vec<_>>();
    counts.shuffle(&mut rng);
    for count in counts {
        let mut r = &buf[Properties::DESCRIPTOR.encode_size()..];
        ListHeader::decode(&mut r)?;
        let partial = Properties::decode_fields(&mut r, count, &DecodeOpts::default())?;

        let mut expected = Properties::default();
        if count > 0 {
            expected.message_id = full.message_id.clone();
        }
        if count > 2 {
            expected.to = full.to.clone();
        }
        if count > 3 {
            expected.subject = full.subject.clone();
        }
        if count > 11 {
            expected.group_sequence = full.group_sequence;
        }
        assert_eq!(expected, partial, "count {}", count);
    }

    Ok(())
}

/// Writes a header list whose trailing fields are unknown to this schema.
fn encode_from_newer_peer(extra: &[&[u8]]) -> BytesMut {
    let known: &[&[u8]] = &[&[0x41], &[0x50, 0x09], &[0x40], &[0x40], &[0x43]];
    let fields = known.iter().chain(extra.iter()).collect_vec();
    let values_size = fields.iter().map(|f| f.len()).sum::<usize>();

    let mut w = BytesMut::new();
    Header::DESCRIPTOR.encode(&mut w);
    ListFraming::choose(fields.len(), values_size).encode(fields.len(), values_size, &mut w);
    for f in fields {
        w.put_slice(f);
    }
    w
}

/// A newer peer knows more fields. Those past ours are skipped, or rejected when strict.
pub fn test_newer_peer() -> Result<()> {
    let expected = Header {
        durable: Some(true),
        priority: Some(9),
        delivery_count: Some(0),
        ..Default::default()
    };

    let extras: [&[u8]; 3] = [&[0x41], &[0xa1, 0x02, b'h', b'i'], &[0x40]];
    for extra in extras.iter().copied().powerset() {
        let mut w = encode_from_newer_peer(&extra);
        w.put_u8(0xee);

        let mut r = &w[..];
        let header = Header::decode(&mut r, &DecodeOpts::default())?;
        assert_eq!(expected, header);
        /* Bytes after the list are not consumed. */
        assert_eq!(&[0xeeu8][..], r);

        let mut r = &w[..];
        let composite = Composite::decode(&mut r, &DecodeOpts::default())?;
        assert_eq!(Composite::Header(expected.clone()), composite);

        let res = Header::decode(&mut &w[..], &DecodeOpts::strict());
        if extra.is_empty() {
            assert_eq!(expected, res?);
        } else {
            assert!(matches!(
                res,
                Err(CodecErr::Schema(SchemaErr::ExcessFields {
                    declared: Header::FIELD_COUNT,
                    ..
                }))
            ));
        }
    }

    /* A composite type nobody here knows. */
    let mut w = BytesMut::new();
    Descriptor::new("example:unknown:list", 0x0000_abcd_0000_0001).encode(&mut w);
    w.put_u8(0x45);
    let res = Composite::decode_solo(&w);
    assert!(matches!(res, Err(e) if e.is_schema()));

    Ok(())
}
