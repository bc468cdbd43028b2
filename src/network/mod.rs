use std::{
    io,
    net::{Ipv4Addr, SocketAddr, UdpSocket as StdUdpSocket},
};
use thiserror::Error;
use tokio::net::UdpSocket as TokioUdpSocket;

/// Defines all possible errors for socket operations.
#[derive(Error, Debug)]
pub enum SocketError {
    #[error("Failed to create a new socket")]
    CreateSocket(#[source] io::Error),

    #[error("Failed to enable broadcast on socket")]
    SetBroadcast(#[source] io::Error),

    #[error("Failed to set SO_BINDTODEVICE on interface '{interface}'")]
    BindToDevice {
        interface: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to bind socket to address")]
    BindSocket(#[source] io::Error),

    #[error("Failed to set socket to non-blocking mode")]
    SetNonBlocking(#[source] io::Error),

    #[error("Failed to convert socket to TokioUdpSocket")]
    ConvertToTokio(#[source] io::Error),

    #[error("Failed to send datagram to {target}")]
    Send {
        target: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[allow(dead_code)]
    #[error("Binding to a specific device is not implemented on this platform")]
    NotImplemented,
}

/// Creates a broadcast-capable `tokio::net::UdpSocket` on an ephemeral port.
///
/// When `interface` is given the socket is also pinned to that device, so the
/// broadcast leaves through it regardless of the routing table.
///
/// Must be called from within a Tokio runtime.
pub fn new_broadcast_socket(interface: Option<&str>) -> Result<TokioUdpSocket, SocketError> {
    use socket2::{Domain, Socket, Type};

    let socket2 =
        Socket::new(Domain::IPV4, Type::DGRAM, None).map_err(SocketError::CreateSocket)?;

    // Set `SO_BROADCAST`. Sending to x.x.x.255 fails with EACCES without it.
    socket2
        .set_broadcast(true)
        .map_err(SocketError::SetBroadcast)?;

    if let Some(interface) = interface {
        bind_to_device(&socket2, interface)?;
    }

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0));
    socket2.bind(&addr.into()).map_err(SocketError::BindSocket)?;

    let std_socket: StdUdpSocket = socket2.into();
    std_socket
        .set_nonblocking(true)
        .map_err(SocketError::SetNonBlocking)?;
    TokioUdpSocket::from_std(std_socket).map_err(SocketError::ConvertToTokio)
}

#[cfg(target_os = "linux")]
fn bind_to_device(socket: &socket2::Socket, interface: &str) -> Result<(), SocketError> {
    use std::os::fd::AsRawFd;

    tracing::debug!("Binding socket to device '{}'", interface);

    // Set `SO_BINDTODEVICE`. This is an unsafe raw syscall.
    // It is safe here because we use a valid file descriptor and correct parameters.
    let ret = unsafe {
        libc::setsockopt(
            socket.as_raw_fd(),
            libc::SOL_SOCKET,
            libc::SO_BINDTODEVICE,
            interface.as_ptr() as *const libc::c_void,
            interface.len() as libc::socklen_t,
        )
    };
    if ret < 0 {
        return Err(SocketError::BindToDevice {
            interface: interface.to_string(),
            source: io::Error::last_os_error(),
        });
    }
    Ok(())
}

/// Fallback for non-Linux systems where `SO_BINDTODEVICE` is not available.
#[cfg(not(target_os = "linux"))]
fn bind_to_device(_socket: &socket2::Socket, _interface: &str) -> Result<(), SocketError> {
    Err(SocketError::NotImplemented)
}
