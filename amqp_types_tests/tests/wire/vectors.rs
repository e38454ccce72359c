use amqp_types::serde::{DescribedList, FormatCode, Primitive, Symbol};
use amqp_types::types::{Composite, Header};
use anyhow::Result;
use bytes::{BufMut, BytesMut};

fn verify_encode(header: &Header, expected: &[u8]) -> Result<()> {
    let buf = header.encode_solo();
    assert_eq!(expected, &buf[..], "{}", header);
    assert_eq!(header, &Header::decode_solo(&buf)?);
    Ok(())
}

fn verify_decode(buf: &[u8], expected: &Header) -> Result<()> {
    assert_eq!(expected, &Header::decode_solo(buf)?);
    assert_eq!(Composite::Header(expected.clone()), Composite::decode_solo(buf)?);
    Ok(())
}

pub fn test_header_vectors() -> Result<()> {
    verify_encode(&Header::default(), &[0x00, 0x53, 0x70, 0x45])?;

    verify_encode(
        &Header {
            durable: Some(true),
            priority: Some(4),
            ttl: Some(60000),
            first_acquirer: Some(false),
            delivery_count: Some(0),
        },
        &[
            0x00, 0x53, 0x70, 0xc0, 0x0b, 0x05, 0x41, 0x50, 0x04, 0x70, 0x00, 0x00, 0xea, 0x60,
            0x42, 0x43,
        ],
    )?;

    verify_encode(
        &Header {
            delivery_count: Some(1),
            ..Default::default()
        },
        &[
            0x00, 0x53, 0x70, 0xc0, 0x07, 0x05, 0x40, 0x40, 0x40, 0x40, 0x52, 0x01,
        ],
    )?;

    /* Forms a peer may send, but this encoder never produces. */

    let expected = Header {
        durable: Some(true),
        ttl: Some(1),
        ..Default::default()
    };
    verify_decode(
        &[
            0x00, 0x80, 0, 0, 0, 0, 0, 0, 0, 0x70, 0xd0, 0, 0, 0, 0x0c, 0, 0, 0, 0x03, 0x56,
            0x01, 0x40, 0x70, 0, 0, 0, 1,
        ],
        &expected,
    )?;

    let mut w = BytesMut::new();
    FormatCode::Described.encode(&mut w);
    Symbol::from(Header::NAME).encode(&mut w);
    w.put_slice(&[0xc0, 0x04, 0x03, 0x42, 0x40, 0x43]);
    verify_decode(
        &w,
        &Header {
            durable: Some(false),
            ttl: Some(0),
            ..Default::default()
        },
    )?;

    /* An explicit all-null list equals the empty one. */
    verify_decode(&[0x00, 0x53, 0x70, 0xc0, 0x03, 0x02, 0x40, 0x40], &Header::default())?;

    Ok(())
}
