use ubeacon_buffers::{Reader, Writer};

#[test]
fn writer_wire_matrix() {
    let mut writer = Writer::new();
    writer.u8(0x02);
    writer.i8(-70);
    writer.u16(0x0539);
    writer.i16(-1000);
    writer.u16_le(0x094F);
    writer.i16_le(-128 * 256);
    writer.u32_le(5_703_825);
    writer.buf(&[0xBE, 0xAC]);
    assert_eq!(
        writer.flush(),
        vec![
            0x02, 0xBA, 0x05, 0x39, 0xFC, 0x18, 0x4F, 0x09, 0x00, 0x80, 0x91, 0x08, 0x57, 0x00,
            0xBE, 0xAC
        ]
    );
}

#[test]
fn writer_reset_and_flush() {
    let mut writer = Writer::with_capacity(8);
    writer.u8(1);
    writer.reset();
    assert!(writer.is_empty());
    writer.u16(0xAAFE);
    assert_eq!(writer.len(), 2);
    assert_eq!(writer.flush(), vec![0xAA, 0xFE]);
    assert!(writer.is_empty());
}

#[test]
fn reader_wire_matrix() {
    let data = [
        0x02, 0xBA, 0x05, 0x39, 0xFC, 0x18, 0x4F, 0x09, 0x00, 0x80, 0x91, 0x08, 0x57, 0x00, 0xBE,
        0xAC,
    ];
    let mut reader = Reader::new(&data);
    assert_eq!(reader.u8(), 0x02);
    assert_eq!(reader.i8(), -70);
    assert_eq!(reader.u16(), 0x0539);
    assert_eq!(reader.i16(), -1000);
    assert_eq!(reader.u16_le(), 0x094F);
    assert_eq!(reader.i16_le(), -128 * 256);
    assert_eq!(reader.u32_le(), 5_703_825);
    assert_eq!(reader.buf(2), &[0xBE, 0xAC]);
    assert_eq!(reader.size(), 0);
}

#[test]
fn reader_peek_and_skip() {
    let data = [0x02, 0x01, 0x06, 0x1B, 0xFF];
    let mut reader = Reader::new(&data);
    assert_eq!(reader.peek(), 0x02);
    assert_eq!(reader.x, 0);
    reader.skip(3);
    assert_eq!(reader.u8(), 0x1B);
    assert_eq!(reader.size(), 1);
    reader.reset(&data);
    assert_eq!(reader.u8(), 0x02);
}
