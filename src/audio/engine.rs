// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Playback engine: a pool of cached rodio sinks, one per sound id.
//!
//! Sinks are created lazily on first play and retained after a stop so a
//! sound resumes without re-opening the output. Stopping clears the sink's
//! queue, which rewinds the sound to its start; the next play appends a
//! fresh looping decoder.

use crate::mixer::AudioCommand;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("Failed to open audio output: {0}")]
    Stream(#[from] rodio::StreamError),
    #[error("Failed to create playback sink: {0}")]
    Play(#[from] rodio::PlayError),
    #[error("Failed to decode audio: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Owns the output stream and the sink cache shared across the mixer
/// window's open/close cycles.
pub struct AudioEngine {
    // Keeps the output device alive; dropping it silences every sink.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sinks: HashMap<String, Sink>,
    alarm: Option<Sink>,
    assets_dir: PathBuf,
}

impl AudioEngine {
    /// Open the default audio output.
    pub fn new(assets_dir: PathBuf) -> Result<Self, AudioError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
            sinks: HashMap::new(),
            alarm: None,
            assets_dir,
        })
    }

    /// Execute a mixer command. Returns the failed sound id, if any, so the
    /// caller can roll its `playing` flag back.
    pub fn execute(&mut self, command: AudioCommand) -> Option<String> {
        match command {
            AudioCommand::Play { id, path, volume } => {
                if let Err(e) = self.play_looping(&id, &path, volume) {
                    warn!("Failed to start '{}': {}", id, e);
                    return Some(id);
                }
            }
            AudioCommand::Stop { id } => self.stop(&id),
            AudioCommand::SetVolume { id, volume } => self.set_volume(&id, volume),
            AudioCommand::StopAll => self.stop_all(),
        }
        None
    }

    /// Start (or resume) a looping sound, creating its sink if absent.
    fn play_looping(&mut self, id: &str, path: &Path, volume: f32) -> Result<(), AudioError> {
        if !self.sinks.contains_key(id) {
            let sink = Sink::try_new(&self.handle)?;
            self.sinks.insert(id.to_string(), sink);
        }
        let sink = &self.sinks[id];

        // A stopped sink has an empty queue: rewound to the start.
        if sink.empty() {
            let source = Decoder::new_looped(BufReader::new(File::open(path)?))?;
            sink.append(source);
        }
        sink.set_volume(volume);
        sink.play();
        debug!("Playing '{}' at volume {:.2}", id, volume);
        Ok(())
    }

    /// Stop a sound, rewinding it; the sink stays cached for fast resume.
    fn stop(&mut self, id: &str) {
        if let Some(sink) = self.sinks.get(id) {
            sink.stop();
            debug!("Stopped '{}'", id);
        }
    }

    fn set_volume(&mut self, id: &str, volume: f32) {
        if let Some(sink) = self.sinks.get(id) {
            sink.set_volume(volume);
        }
    }

    /// Stop every cached sound.
    pub fn stop_all(&mut self) {
        for sink in self.sinks.values() {
            sink.stop();
        }
    }

    /// Play the alarm sample once at the given volume.
    pub fn play_alarm(&mut self, volume: f32) -> Result<(), AudioError> {
        let path = crate::mixer::catalog::alarm_path(&self.assets_dir);
        if self.alarm.is_none() {
            self.alarm = Some(Sink::try_new(&self.handle)?);
        }
        if let Some(sink) = self.alarm.as_ref() {
            sink.stop();
            let source = Decoder::new(BufReader::new(File::open(&path)?))?;
            sink.append(source);
            sink.set_volume(volume);
            sink.play();
            debug!("Alarm at volume {:.2}", volume);
        }
        Ok(())
    }

    /// Follow the timer's volume slider while an alarm sink exists.
    pub fn set_alarm_volume(&mut self, volume: f32) {
        if let Some(sink) = self.alarm.as_ref() {
            sink.set_volume(volume);
        }
    }
}
