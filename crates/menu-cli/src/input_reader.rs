use std::io;
use std::sync::mpsc::{self, Receiver, Sender};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

#[derive(Debug)]
pub enum InputMessage {
    Key(KeyEvent),
    Error(String),
}

/// Spawns the thread that blocks on terminal input. Only one read is ever in
/// flight; the next starts after the previous event has been posted.
#[cfg_attr(test, allow(dead_code))]
pub fn start() -> Receiver<InputMessage> {
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        read_loop(event::read, &tx);
    });

    rx
}

fn read_loop<R>(mut read: R, tx: &Sender<InputMessage>)
where
    R: FnMut() -> io::Result<Event>,
{
    loop {
        match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if tx.send(InputMessage::Key(key)).is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(err) => {
                let _ = tx.send(InputMessage::Error(err.to_string()));
                break;
            }
        }
    }
}
