//! Transport contract checks shared by every transport in this crate
//!
//! Writes a 4 KiB pattern, reads it back with an exact-count read, writes it
//! again and reads it back through a plain short-read loop.

#![allow(non_snake_case)]

use thriftwire_transport::{
    BufferedTransport, BufferedTransportFactory, MemoryBuffer, Transport, TransportFactory,
};

const N: usize = 4096;

fn test_data() -> Vec<u8> {
    (0..N).map(|i| ((i + 'a' as usize) % 255) as u8).collect()
}

fn exercise_transport<T: Transport>(transport: &mut T) {
    let data = test_data();
    if !transport.is_open() {
        transport.open().unwrap();
    }

    transport.write_all(&data).unwrap();
    transport.flush().unwrap();

    let mut buf = vec![0u8; N];
    let n = transport.read_all(&mut buf).unwrap();
    assert_eq!(n, N);
    assert_eq!(buf, data);

    transport.write_all(&data).unwrap();
    transport.flush().unwrap();
    assert!(transport.peek(), "peek should report pending data");

    let mut buf = vec![0u8; N];
    let mut n = 0;
    while n < N {
        let read = transport.read(&mut buf[n..]).unwrap();
        assert!(read > 0);
        n += read;
    }
    assert_eq!(buf, data);
    assert!(!transport.peek(), "peek should report drained stream");

    transport.close().unwrap();
    assert!(!transport.is_open());
}

#[test]
fn MemoryBuffer___transport_contract___holds() {
    let mut transport = MemoryBuffer::new();

    exercise_transport(&mut transport);
}

#[test]
fn BufferedTransport___transport_contract___holds_with_small_buffer() {
    let mut transport = BufferedTransport::new(MemoryBuffer::new(), 100);

    exercise_transport(&mut transport);
}

#[test]
fn BufferedTransport___transport_contract___holds_with_default_factory() {
    let mut transport = BufferedTransportFactory::default().get_transport(MemoryBuffer::new());

    exercise_transport(&mut transport);
}

#[test]
fn BufferedTransport___transport_contract___holds_when_stacked() {
    let inner = BufferedTransport::new(MemoryBuffer::new(), 7);
    let mut transport = BufferedTransport::new(inner, 64);

    exercise_transport(&mut transport);
}

#[test]
fn BufferedTransport___transport_contract___holds_with_zero_capacity() {
    let mut transport = BufferedTransport::new(MemoryBuffer::new(), 0);

    exercise_transport(&mut transport);
}
