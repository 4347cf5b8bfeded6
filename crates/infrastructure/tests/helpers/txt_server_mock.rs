#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

const RCODE_NXDOMAIN: u8 = 3;
const RCODE_SERVFAIL: u8 = 2;

/// How the mock nameserver answers every TXT query it receives.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// NOERROR with one TXT record per entry: `(ttl, character strings)`.
    Answer(Vec<(u32, Vec<String>)>),
    NxDomain,
    ServFail,
    /// UDP answers are empty with TC set; TCP carries the records.
    TruncateUdp(Vec<(u32, Vec<String>)>),
    /// Echoes a different transaction ID than the query used.
    WrongId,
}

/// A loopback nameserver serving canned TXT answers over UDP and TCP on
/// the same port.
pub struct MockTxtServer {
    addr: SocketAddr,
    udp_queries: Arc<AtomicUsize>,
    tcp_queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockTxtServer {
    pub async fn start(behavior: MockBehavior) -> std::io::Result<Self> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let listener = TcpListener::bind(addr).await?;

        let udp_queries = Arc::new(AtomicUsize::new(0));
        let tcp_queries = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let udp_count = Arc::clone(&udp_queries);
        let tcp_count = Arc::clone(&tcp_queries);
        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            udp_count.fetch_add(1, Ordering::SeqCst);
                            let response = build_response(&buf[..len], &behavior, false);
                            let _ = socket.send_to(&response, peer).await;
                        }
                    }
                    result = listener.accept() => {
                        if let Ok((mut stream, _)) = result {
                            tcp_count.fetch_add(1, Ordering::SeqCst);
                            let behavior = behavior.clone();
                            tokio::spawn(async move {
                                let mut len_buf = [0u8; 2];
                                if stream.read_exact(&mut len_buf).await.is_err() {
                                    return;
                                }
                                let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                                if stream.read_exact(&mut query).await.is_err() {
                                    return;
                                }
                                let response = build_response(&query, &behavior, true);
                                let len = (response.len() as u16).to_be_bytes();
                                let _ = stream.write_all(&len).await;
                                let _ = stream.write_all(&response).await;
                            });
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            udp_queries,
            tcp_queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn udp_queries(&self) -> usize {
        self.udp_queries.load(Ordering::SeqCst)
    }

    pub fn tcp_queries(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
    }
}

impl Drop for MockTxtServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn build_response(query: &[u8], behavior: &MockBehavior, over_tcp: bool) -> Vec<u8> {
    if query.len() < 12 {
        return vec![];
    }

    let (rcode, truncated, records): (u8, bool, &[(u32, Vec<String>)]) = match behavior {
        MockBehavior::Answer(records) => (0, false, records),
        MockBehavior::NxDomain => (RCODE_NXDOMAIN, false, &[]),
        MockBehavior::ServFail => (RCODE_SERVFAIL, false, &[]),
        MockBehavior::TruncateUdp(records) if over_tcp => (0, false, records),
        MockBehavior::TruncateUdp(_) => (0, true, &[]),
        MockBehavior::WrongId => (0, false, &[]),
    };

    let mut response = Vec::with_capacity(512);

    let id = u16::from_be_bytes([query[0], query[1]]);
    let id = match behavior {
        MockBehavior::WrongId => id.wrapping_add(1),
        _ => id,
    };
    response.extend_from_slice(&id.to_be_bytes());

    // QR + RD, then TC when requested
    let mut flags_hi = 0x81;
    if truncated {
        flags_hi |= 0x02;
    }
    response.push(flags_hi);
    // RA + rcode
    response.push(0x80 | rcode);

    response.extend_from_slice(&query[4..6]);
    response.extend_from_slice(&(records.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00]);
    response.extend_from_slice(&[0x00, 0x00]);

    response.extend_from_slice(&query[12..]);

    for (ttl, strings) in records {
        let mut rdata = Vec::new();
        for s in strings {
            rdata.push(s.len() as u8);
            rdata.extend_from_slice(s.as_bytes());
        }

        response.extend_from_slice(&[0xc0, 0x0c]);
        response.extend_from_slice(&[0x00, 0x10]);
        response.extend_from_slice(&[0x00, 0x01]);
        response.extend_from_slice(&ttl.to_be_bytes());
        response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        response.extend_from_slice(&rdata);
    }

    response
}
