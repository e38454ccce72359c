#[cfg(test)]
mod test {
    use crate::config::DecodeOpts;
    use crate::serde::{
        CodecErr, DescribedList, Descriptor, Field, FormatCode, FramingErr, Primitive,
        SchemaErr, Slot, Symbol, WriteLen,
    };
    use anyhow::Result;
    use bytes::{Buf, BufMut, BytesMut};
    use std::fmt;

    /// Three slots of three different widths.
    #[derive(PartialEq, Eq, Default, Debug)]
    struct Trio {
        flag: Option<bool>,
        name: Option<Symbol>,
        num: Option<u64>,
    }

    impl DescribedList for Trio {
        const LABEL: &'static str = "trio";
        const DESCRIPTOR: Descriptor = Descriptor::new("test:trio:list", 0x1_0000_0001);
        const FIELDS: &'static [&'static dyn Field<Self>] = &[
            &Slot::<Self, bool>::new("flag", |t| &t.flag, |t| &mut t.flag),
            &Slot::<Self, Symbol>::new("name", |t| &t.name, |t| &mut t.name),
            &Slot::<Self, u64>::new("num", |t| &t.num, |t| &mut t.num),
        ];
    }

    impl fmt::Display for Trio {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.render(f)
        }
    }

    /// Declares one byte fewer than it writes.
    #[derive(PartialEq, Eq, Debug)]
    struct Skewed;

    impl Primitive for Skewed {
        const TYPE_NAME: &'static str = "skewed";

        fn encode_size(&self) -> usize {
            2
        }
        fn encode(&self, w: &mut BytesMut) -> WriteLen {
            let start = w.len();
            FormatCode::Vbin8.encode(w);
            w.put_slice(&[1, 0xff]);
            WriteLen::since(start, w)
        }
        fn decode_body(code: FormatCode, _r: &mut dyn Buf) -> Result<Self, CodecErr> {
            Err(Self::unexpected(code))
        }
        fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "skewed")
        }
    }

    #[derive(Default)]
    struct Solo {
        val: Option<Skewed>,
    }

    impl DescribedList for Solo {
        const LABEL: &'static str = "solo";
        const DESCRIPTOR: Descriptor = Descriptor::new("test:solo:list", 0x1_0000_0002);
        const FIELDS: &'static [&'static dyn Field<Self>] =
            &[&Slot::<Self, Skewed>::new("val", |s| &s.val, |s| &mut s.val)];
    }

    #[test]
    fn write_len_counts_written_bytes() {
        let mut w = BytesMut::new();
        w.put_u8(0xee);
        let w_len = Skewed.encode(&mut w);
        assert_eq!(3, *w_len);
        assert_eq!(4, w.len());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "solo fields wrote a different length than was computed")]
    fn size_disagreeing_with_write_is_caught() {
        let solo = Solo { val: Some(Skewed) };
        let mut w = BytesMut::new();
        solo.encode(&mut w);
    }

    #[test]
    fn wide_descriptor_code() -> Result<()> {
        let trio = Trio {
            flag: Some(true),
            ..Default::default()
        };
        let buf = trio.encode_solo();
        assert_eq!(
            &[0x00u8, 0x80, 0, 0, 0, 1, 0, 0, 0, 1, 0xc0, 2, 1, 0x41][..],
            &buf[..]
        );
        assert_eq!(trio.encode_size(), buf.len());
        assert_eq!(trio, Trio::decode_solo(&buf)?);
        Ok(())
    }

    #[test]
    fn inner_nulls_are_markers() -> Result<()> {
        let trio = Trio {
            num: Some(300),
            ..Default::default()
        };
        assert_eq!(3, trio.encoded_count());

        let buf = trio.encode_solo();
        let list = &buf[10..];
        assert_eq!(
            &[0xc0u8, 12, 3, 0x40, 0x40, 0x80, 0, 0, 0, 0, 0, 0, 1, 44][..],
            list
        );
        assert_eq!(trio, Trio::decode_solo(&buf)?);
        Ok(())
    }

    #[test]
    fn empty_list() -> Result<()> {
        let trio = Trio::default();
        assert_eq!(0, trio.encoded_count());

        let buf = trio.encode_solo();
        assert_eq!(Some(&0x45), buf.last());
        assert_eq!(11, trio.encode_size());
        assert_eq!(trio, Trio::decode_solo(&buf)?);
        Ok(())
    }

    #[test]
    fn wide_list() -> Result<()> {
        let trio = Trio {
            name: Some(Symbol::from("n".repeat(252).as_str())),
            ..Default::default()
        };
        let buf = trio.encode_solo();
        assert_eq!(trio.encode_size(), buf.len());
        /* A null and a 254-byte sym8 leave no room for the count byte in a u8 size. */
        assert_eq!(0xd0, buf[10]);
        assert_eq!(trio, Trio::decode_solo(&buf)?);
        Ok(())
    }

    #[test]
    fn decode_fields_leaves_rest_null() -> Result<()> {
        let mut w = BytesMut::new();
        w.put_u8(0x42);
        w.put_slice(&[0xa3, 1, b'x']);
        w.put_u8(0x44);

        let trio = Trio::decode_fields(&mut &w[..], 2, &DecodeOpts::default())?;
        assert_eq!(Some(false), trio.flag);
        assert_eq!(Some(Symbol::from("x")), trio.name);
        assert_eq!(None, trio.num);

        let trio = Trio::decode_fields(&mut &w[..], 0, &DecodeOpts::default())?;
        assert_eq!(Trio::default(), trio);
        Ok(())
    }

    #[test]
    fn decode_fields_stops_at_declared_count() -> Result<()> {
        let mut w = BytesMut::new();
        w.put_slice(&[0x41, 0x40, 0x44, 0x41]);

        let mut r = &w[..];
        let trio = Trio::decode_fields(&mut r, 4, &DecodeOpts::default())?;
        assert_eq!(Some(0), trio.num);
        /* The fourth field is left for the caller. */
        assert_eq!(1, r.remaining());

        let res = Trio::decode_fields(&mut &w[..], 4, &DecodeOpts::strict());
        assert!(matches!(
            res,
            Err(CodecErr::Schema(SchemaErr::ExcessFields {
                count: 4,
                declared: 3,
                ..
            }))
        ));
        Ok(())
    }

    #[test]
    fn excess_fields_are_skipped_by_size() -> Result<()> {
        let mut w = BytesMut::new();
        Trio::DESCRIPTOR.encode(&mut w);
        w.put_slice(&[0xc0, 6, 5, 0x41, 0x40, 0x40, 0x41, 0x41]);
        w.put_u8(0xff);

        let mut r = &w[..];
        let trio = Trio::decode(&mut r, &DecodeOpts::default())?;
        assert_eq!(Some(true), trio.flag);
        assert_eq!(&[0xffu8][..], r);
        Ok(())
    }

    #[test]
    fn size_disagrees_with_fields() {
        let mut w = BytesMut::new();
        Trio::DESCRIPTOR.encode(&mut w);
        /* Size declares two field bytes, but one field occupies one byte. */
        w.put_slice(&[0xc0, 3, 1, 0x41, 0x41]);

        let res = Trio::decode_solo(&w);
        assert!(matches!(
            res,
            Err(CodecErr::Framing(FramingErr::SizeMismatch {
                declared: 2,
                consumed: 1
            }))
        ));
    }

    #[test]
    fn fields_cannot_overrun_list() {
        let mut w = BytesMut::new();
        Trio::DESCRIPTOR.encode(&mut w);
        /* Size admits three field bytes, but the ulong body lies beyond them. */
        w.put_slice(&[0xc0, 4, 3, 0x41, 0x40, 0x80, 0, 0, 0, 0, 0, 0, 0, 1]);

        let res = Trio::decode_solo(&w);
        assert!(matches!(
            res,
            Err(CodecErr::Framing(FramingErr::Truncated {
                needed: 8,
                remaining: 0
            }))
        ));

        let mut w = BytesMut::new();
        Trio::DESCRIPTOR.encode(&mut w);
        w.put_slice(&[0xc0, 3, 3, 0x41, 0xa3]);
        let res = Trio::decode_solo(&w);
        assert!(matches!(
            res,
            Err(CodecErr::Framing(FramingErr::Truncated { .. }))
        ));
    }

    #[test]
    fn descriptor_mismatch() {
        let mut w = BytesMut::new();
        Descriptor::new("amqp:header:list", 0x70).encode(&mut w);
        w.put_u8(0x45);

        let res = Trio::decode_solo(&w);
        assert!(matches!(
            res,
            Err(CodecErr::Schema(SchemaErr::DescriptorMismatch {
                expected: "test:trio:list",
                ..
            }))
        ));
    }

    #[test]
    fn render_non_null_only() {
        let mut trio = Trio::default();
        assert_eq!("trio()", trio.to_string());

        trio.num = Some(9);
        assert_eq!("trio(num:9)", trio.to_string());

        trio.flag = Some(false);
        trio.name = Some(Symbol::from("a"));
        assert_eq!("trio(flag:false,name:a,num:9)", trio.to_string());
    }
}
