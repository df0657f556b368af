use rayon::prelude::*;

use crate::{
    composition::model::Session,
    foundation::{
        core::{FrameIndex, FrameRange},
        error::{ReelError, ReelResult},
    },
    pipeline::{
        fingerprint::{FrameFingerprint, fingerprint_frame},
        sink::{FrameSink, SinkConfig},
    },
    timeline::compositor::FrameOutput,
};

#[derive(Clone, Debug)]
pub struct EvalThreading {
    pub parallel: bool,
    /// Frames evaluated per parallel batch before they are handed to the sink.
    pub chunk_size: usize,
    pub threads: Option<usize>,
    /// Fingerprint every frame and count frames identical to their predecessor.
    pub detect_holds: bool,
}

impl Default for EvalThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
            detect_holds: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub frames_total: u64,
    /// Frames inside a crossfade.
    pub frames_blended: u64,
    /// Frames whose fingerprint equals the previous frame's. Only counted with `detect_holds`.
    pub frames_held: u64,
}

/// The whole timeline as a range.
pub fn full_range(session: &Session) -> FrameRange {
    FrameRange {
        start: FrameIndex(0),
        end: FrameIndex(session.total_frames()),
    }
}

/// Evaluate every frame in `range` (start inclusive, end exclusive), in order.
///
/// Parallel and serial runs return identical output; evaluation is a pure function of the frame.
pub fn evaluate_frames(
    session: &Session,
    range: FrameRange,
    threading: &EvalThreading,
) -> ReelResult<Vec<FrameOutput>> {
    check_range(session, range)?;
    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };

    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);
    for chunk in chunks(range, threading.chunk_size)? {
        out.append(&mut evaluate_chunk(session, chunk, pool.as_ref())?);
    }
    Ok(out)
}

/// Evaluate `range` and stream the frames into `sink` in timeline order.
#[tracing::instrument(skip(session, threading, sink), fields(start = range.start.0, end = range.end.0))]
pub fn render_range(
    session: &Session,
    range: FrameRange,
    threading: &EvalThreading,
    sink: &mut dyn FrameSink,
) -> ReelResult<RenderStats> {
    check_range(session, range)?;
    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };

    let manifest = session.manifest();
    sink.begin(SinkConfig {
        width: manifest.width,
        height: manifest.height,
        fps: session.composition().fps,
        frame_count: range.len_frames(),
    })?;

    let mut stats = RenderStats::default();
    let mut previous: Option<FrameFingerprint> = None;
    for chunk in chunks(range, threading.chunk_size)? {
        for frame in evaluate_chunk(session, chunk, pool.as_ref())? {
            if threading.detect_holds {
                let fp = fingerprint_frame(&frame)?;
                if previous == Some(fp) {
                    stats.frames_held += 1;
                }
                previous = Some(fp);
            }
            if frame.is_blend() {
                stats.frames_blended += 1;
            }
            sink.push_frame(frame.frame, &frame)?;
            stats.frames_total += 1;
        }
    }
    sink.end()?;

    tracing::info!(
        frames = stats.frames_total,
        blended = stats.frames_blended,
        held = stats.frames_held,
        "range rendered"
    );
    Ok(stats)
}

fn evaluate_chunk(
    session: &Session,
    range: FrameRange,
    pool: Option<&rayon::ThreadPool>,
) -> ReelResult<Vec<FrameOutput>> {
    let frames: Vec<i64> = (range.start.0..range.end.0).map(|f| f as i64).collect();
    match pool {
        Some(pool) => pool.install(|| {
            frames
                .par_iter()
                .map(|&f| session.evaluate(f))
                .collect::<ReelResult<Vec<_>>>()
        }),
        None => frames.iter().map(|&f| session.evaluate(f)).collect(),
    }
}

fn check_range(session: &Session, range: FrameRange) -> ReelResult<()> {
    if range.is_empty() {
        return Err(ReelError::validation("render range must be non-empty"));
    }
    if range.end.0 > session.total_frames() {
        return Err(ReelError::validation(format!(
            "render range end {} exceeds composition length of {} frames",
            range.end.0,
            session.total_frames()
        )));
    }
    if range.end.0 > i64::MAX as u64 {
        return Err(ReelError::validation("render range end exceeds i64 frames"));
    }
    Ok(())
}

fn chunks(range: FrameRange, chunk_size: usize) -> ReelResult<Vec<FrameRange>> {
    let size = normalized_chunk_size(chunk_size);
    let mut out = Vec::new();
    let mut start = range.start.0;
    while start < range.end.0 {
        let end = (start + size).min(range.end.0);
        out.push(
            FrameRange::new(FrameIndex(start), FrameIndex(end))
                .map_err(|e| ReelError::evaluation(format!("invalid chunk range: {e}")))?,
        );
        start = end;
    }
    Ok(out)
}

pub(crate) fn build_thread_pool(threads: Option<usize>) -> ReelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ReelError::validation(
            "evaluation threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ReelError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/render.rs"]
mod tests;
