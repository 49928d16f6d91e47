#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::{
    error::EngineError,
    fourier::{FourierForm, FourierSpec},
    sampling::{SampleGrid, Waveform},
    synth::{SignalSpec, Synthesis},
};

/// One computation the interface asks for.
#[derive(Debug, Clone)]
pub enum PlotRequest {
    /// Sample each signal and their sum.
    Signals {
        specs: Vec<SignalSpec>,
        grid: SampleGrid,
    },
    /// Parse the form and sample the series.
    Fourier { form: FourierForm, grid: SampleGrid },
}

impl PlotRequest {
    pub fn kind(&self) -> RequestKind {
        match self {
            PlotRequest::Signals { .. } => RequestKind::Signals,
            PlotRequest::Fourier { .. } => RequestKind::Fourier,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Signals,
    Fourier,
}

impl RequestKind {
    pub fn label(self) -> &'static str {
        match self {
            RequestKind::Signals => "Plot Signals",
            RequestKind::Fourier => "Plot Fourier Series",
        }
    }
}

/// Result of one [`PlotRequest`], in the order requests were made.
#[derive(Debug, Clone)]
pub enum PlotResponse {
    Signals {
        grid: SampleGrid,
        synthesis: Synthesis,
    },
    Fourier {
        grid: SampleGrid,
        spec: FourierSpec,
        waveform: Waveform,
    },
    /// The request was rejected; nothing should be redrawn.
    Failed {
        request: RequestKind,
        error: EngineError,
    },
}

/// Source of pending requests for a worker loop.
pub trait RequestReceiver {
    fn pop(&mut self) -> Option<PlotRequest>;
}

#[cfg(feature = "rtrb")]
impl RequestReceiver for Consumer<PlotRequest> {
    fn pop(&mut self) -> Option<PlotRequest> {
        Consumer::pop(self).ok()
    }
}
