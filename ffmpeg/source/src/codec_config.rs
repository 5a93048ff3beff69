/*!
    Opaque codec configuration for passing to decoders.
*/

use ffmpeg_next::codec;

/**
    Codec parameters of one source stream.

    Hides the ffmpeg-next parameter type from consumers that only move the
    configuration from a [`Source`](crate::Source) to `ffmpeg-decode`.
*/
pub struct CodecConfig {
    stream_index: usize,
    parameters: codec::Parameters,
}

impl CodecConfig {
    pub(crate) fn new(stream_index: usize, parameters: codec::Parameters) -> Self {
        Self {
            stream_index,
            parameters,
        }
    }

    /**
        Index of the stream these parameters were taken from.
    */
    pub fn stream_index(&self) -> usize {
        self.stream_index
    }

    /**
        The library codec identifier, used to resolve a decoder.
    */
    pub fn codec_id(&self) -> codec::Id {
        self.parameters.id()
    }

    /**
        Consume the config, returning the raw parameters for `ffmpeg-decode`.
    */
    pub fn into_parameters(self) -> codec::Parameters {
        self.parameters
    }
}

impl Clone for CodecConfig {
    fn clone(&self) -> Self {
        Self {
            stream_index: self.stream_index,
            parameters: self.parameters.clone(),
        }
    }
}

impl std::fmt::Debug for CodecConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodecConfig")
            .field("stream_index", &self.stream_index)
            .field("codec_id", &self.parameters.id())
            .finish_non_exhaustive()
    }
}
