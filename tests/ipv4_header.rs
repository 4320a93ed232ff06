//! Bit-level decode of an IPv4 header followed by a UDP header, built from
//! the single-bit primitives: an n-bit unsigned-integer parser assembled
//! with `sequence_of`, and fixed-pattern assertions for the version nibble.

use cursorcomb::cursors::BitCursor;
use cursorcomb::{
    AndExt, Cursor, MapExt, ParseError, Parser, bit, one_bit, run, sequence_of, zero_bit,
};

#[derive(Debug, PartialEq)]
struct Ipv4Header {
    version: u32,
    ihl: u32,
    tos: u32,
    total_length: u32,
    identification: u32,
    flags: u32,
    fragment_offset: u32,
    ttl: u32,
    protocol: u32,
    checksum: u32,
    source: u32,
    destination: u32,
}

#[derive(Debug, PartialEq)]
struct UdpHeader {
    source_port: u32,
    destination_port: u32,
    length: u32,
    checksum: u32,
}

/// An n-bit big-endian unsigned integer.
fn uint<'src>(
    bits: usize,
) -> impl Parser<'src, Cursor = BitCursor<'src>, Output = u32, Error = ParseError> {
    sequence_of(vec![bit(); bits])
        .map(|bits| bits.iter().fold(0u32, |acc, &b| (acc << 1) | b as u32))
}

// The version nibble must be the constant 0100.
fn version<'src>()
-> impl Parser<'src, Cursor = BitCursor<'src>, Output = u32, Error = ParseError> {
    zero_bit()
        .and(one_bit())
        .and(zero_bit())
        .and(zero_bit())
        .map(|_| 4)
}

fn ipv4_header<'src>()
-> impl Parser<'src, Cursor = BitCursor<'src>, Output = Ipv4Header, Error = ParseError> {
    version()
        .and(sequence_of(vec![
            uint(4),  // internet header length
            uint(8),  // type of service
            uint(16), // total length
            uint(16), // identification
            uint(3),  // flags
            uint(13), // fragment offset
            uint(8),  // time to live
            uint(8),  // protocol
            uint(16), // header checksum
            uint(32), // source address
            uint(32), // destination address
        ]))
        .map(|(version, fields)| Ipv4Header {
            version,
            ihl: fields[0],
            tos: fields[1],
            total_length: fields[2],
            identification: fields[3],
            flags: fields[4],
            fragment_offset: fields[5],
            ttl: fields[6],
            protocol: fields[7],
            checksum: fields[8],
            source: fields[9],
            destination: fields[10],
        })
}

fn udp_header<'src>()
-> impl Parser<'src, Cursor = BitCursor<'src>, Output = UdpHeader, Error = ParseError> {
    sequence_of(vec![uint(16), uint(16), uint(16), uint(16)]).map(|fields| UdpHeader {
        source_port: fields[0],
        destination_port: fields[1],
        length: fields[2],
        checksum: fields[3],
    })
}

// 20-byte IPv4 header (version 4, IHL 5, UDP payload, 172.20.2.253 ->
// 172.20.0.6) followed by an 8-byte UDP header.
const PACKET: [u8; 28] = [
    0x45, 0x00, 0x00, 0x44, 0xad, 0x0b, 0x00, 0x00, 0x40, 0x11, 0x72, 0x72, 0xac, 0x14, 0x02,
    0xfd, 0xac, 0x14, 0x00, 0x06, // IPv4
    0x30, 0x39, 0x00, 0x35, 0x00, 0x30, 0x12, 0x34, // UDP
];

#[test]
fn decodes_ipv4_header_fields() {
    let (header, cursor) = run(&ipv4_header(), &PACKET).unwrap();

    assert_eq!(header.version, 4);
    assert_eq!(header.ihl, 5);
    assert_eq!(header.tos, 0);
    assert_eq!(header.total_length, 0x0044);
    assert_eq!(header.identification, 0xad0b);
    assert_eq!(header.flags, 0);
    assert_eq!(header.fragment_offset, 0);
    assert_eq!(header.ttl, 0x40);
    assert_eq!(header.protocol, 0x11);
    assert_eq!(header.checksum, 0x7272);
    assert_eq!(header.source, 0xac14_02fd);
    assert_eq!(header.destination, 0xac14_0006);
    assert_eq!(cursor.position(), 160);
}

#[test]
fn decodes_udp_header_after_ipv4() {
    let parser = ipv4_header().and(udp_header());

    let ((ip, udp), cursor) = run(&parser, &PACKET).unwrap();
    assert_eq!(ip.protocol, 0x11);
    assert_eq!(udp.source_port, 12345);
    assert_eq!(udp.destination_port, 53);
    assert_eq!(udp.length, 0x0030);
    assert_eq!(udp.checksum, 0x1234);
    assert_eq!(cursor.position(), 224);
}

#[test]
fn rejects_non_v4_version_nibble() {
    // 0x65: version nibble 0110, the pattern assertion fails on the third bit.
    let mut packet = PACKET;
    packet[0] = 0x65;

    let error = run(&ipv4_header(), &packet).unwrap_err();
    assert_eq!(error.position(), 2);
}

#[test]
fn truncated_packet_runs_out_of_bits() {
    let truncated = &PACKET[..8];

    let error = run(&ipv4_header(), truncated).unwrap_err();
    assert_eq!(error, ParseError::UnexpectedEndOfInput { position: 64 });
}

#[test]
fn uint_reads_bits_most_significant_first() {
    let data = [0b1110_1010];

    let (value, cursor) = run(&uint(8), &data).unwrap();
    assert_eq!(value, 0b1110_1010);
    assert_eq!(cursor.position(), 8);
}
