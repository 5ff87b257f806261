//! `tracing` output forwarded line by line into a crossbeam channel, so the
//! desktop app can show its own log.

use crossbeam_channel::{Receiver, Sender};
use std::io;
use tracing_subscriber::fmt::MakeWriter;

pub struct ChannelWriter {
    sender: Sender<String>,
}

impl io::Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let msg = String::from_utf8_lossy(buf).to_string();
        // A closed or full channel must not break logging elsewhere
        let _ = self.sender.try_send(msg);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// Cloneable wrapper for MakeWriter
#[derive(Clone)]
pub struct ChannelWriterFactory {
    sender: Sender<String>,
}

impl ChannelWriterFactory {
    /// Factory plus the receiving end to hand to the UI
    pub fn unbounded() -> (Self, Receiver<String>) {
        let (sender, receiver) = crossbeam_channel::unbounded();
        (Self { sender }, receiver)
    }
}

impl<'a> MakeWriter<'a> for ChannelWriterFactory {
    type Writer = ChannelWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ChannelWriter {
            sender: self.sender.clone(),
        }
    }
}
