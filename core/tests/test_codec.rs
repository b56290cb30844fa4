#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use directlz4_core::{
        codec::{compress_bound, CodecError},
        compression::{
            codec_ids,
            codecs::{Lz4Codec, Lz4HcCodec},
            create_codec, resolve, Codec, CodecConfig, CompressionCodec, CompressionError,
        },
        telemetry::CodecStats,
    };

    fn payload() -> Vec<u8> {
        "teruyiuylo[piptuytrtyytytytyttryjtruyrktuyuyrktyrytrjytjyuyrkg.kyrtyytejyyteyuyrkuyutuyuyruyrukytuyrkuy"
            .repeat(32)
            .into_bytes()
    }

    fn round_trip(codec: &dyn Codec) {
        let src = payload();
        let mut packed = vec![0u8; compress_bound(src.len()).unwrap()];
        let n = codec.compress(&src, &mut packed).unwrap();
        assert!(n < src.len());

        let mut out = vec![0u8; src.len()];
        let r = codec.decompress(&packed[..n], &mut out).unwrap();
        assert_eq!(r, src.len());
        assert_eq!(out, src);
    }

    #[test]
    fn lz4_codec_round_trip() {
        round_trip(&Lz4Codec::new());
    }

    #[test]
    fn lz4hc_codec_round_trip() {
        round_trip(&Lz4HcCodec::new());
    }

    #[test]
    fn codec_ids_are_stable() {
        assert_eq!(CompressionCodec::None.id(), codec_ids::NONE);
        assert_eq!(CompressionCodec::Lz4.id(), 1);
        assert_eq!(CompressionCodec::Lz4Hc.id(), 2);
        assert!(matches!(
            CompressionCodec::verify(7),
            Err(CompressionError::UnsupportedCodec { codec_id: 7 })
        ));
    }

    #[test]
    fn registry_resolves_and_creates() {
        assert_eq!(resolve(codec_ids::LZ4).unwrap().name, "lz4");
        assert_eq!(resolve(codec_ids::LZ4HC).unwrap().default_level, 9);
        assert!(resolve(0xFF).is_err());

        let cfg = CodecConfig::default();
        assert!(create_codec(codec_ids::NONE, &cfg).unwrap().is_none());
        let hc = create_codec(codec_ids::LZ4HC, &cfg).unwrap().unwrap();
        assert_eq!(hc.codec_type(), CompressionCodec::Lz4Hc);
        assert!(create_codec(3, &cfg).is_err());
    }

    #[test]
    fn config_flows_into_codec() {
        let cfg = CodecConfig { compression_threshold: 512, level: 4 };
        let codec = create_codec(codec_ids::LZ4HC, &cfg).unwrap().unwrap();
        assert_eq!(codec.compression_threshold(), 512);
        assert_eq!(codec.level(), 4);
        assert!(!codec.should_compress(511));
        assert!(codec.should_compress(512));

        codec.set_compression_threshold(10);
        codec.set_level(12);
        assert_eq!(codec.compression_threshold(), 10);
        assert_eq!(codec.level(), 12);
    }

    #[test]
    fn default_threshold_is_100() {
        assert_eq!(Lz4Codec::new().compression_threshold(), 100);
        assert_eq!(Lz4Codec::new().level(), 1);
        assert_eq!(Lz4HcCodec::new().level(), 9);
    }

    #[test]
    fn ratio_and_totals_track_compressions() {
        let codec = Lz4Codec::new();
        assert_eq!(codec.avg_compression_ratio(), 1.0);
        assert_eq!(codec.total_processed(), 0);

        let src = payload();
        let mut packed = vec![0u8; compress_bound(src.len()).unwrap()];
        let n = codec.compress(&src, &mut packed).unwrap();

        assert_eq!(codec.total_processed(), src.len() as u64);
        let expected = src.len() as f64 / n as f64;
        assert!((codec.avg_compression_ratio() - expected).abs() < 1e-9);
    }

    #[test]
    fn failures_are_counted_and_wrapped() {
        let codec = Lz4Codec::new();
        let mut out = [0u8; 8];
        let err = codec.decompress(&[0x50, b'a'], &mut out).unwrap_err();
        match err {
            CompressionError::Codec { codec, source } => {
                assert_eq!(codec, "lz4");
                assert!(matches!(source, CodecError::Decompress { .. }));
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(codec.stats().failures, 1);
    }

    #[test]
    fn raw_forms_match_slice_forms() {
        let codec = Lz4HcCodec::new();
        let src = payload();
        let cap = compress_bound(src.len()).unwrap();

        let mut a = vec![0u8; cap];
        let n = codec.compress(&src, &mut a).unwrap();
        let mut b = vec![0u8; cap];
        let m = unsafe { codec.compress_raw(src.as_ptr() as usize, src.len(), b.as_mut_ptr() as usize, cap) };
        assert_eq!(n as i32, m);
        assert_eq!(a, b);

        let mut out = vec![0u8; src.len()];
        let r = unsafe { codec.decompress_raw(b.as_ptr() as usize, n, out.as_mut_ptr() as usize, src.len()) };
        assert_eq!(r as usize, src.len());
        assert_eq!(out, src);

        let stats = codec.stats();
        assert_eq!(stats.compress_calls, 2);
        assert_eq!(stats.decompress_calls, 1);
    }

    #[test]
    fn stats_serialize_to_json() {
        let codec = Lz4Codec::new();
        let src = payload();
        let mut packed = vec![0u8; compress_bound(src.len()).unwrap()];
        codec.compress(&src, &mut packed).unwrap();

        let stats = codec.stats();
        let json = serde_json::to_string(&stats).unwrap();
        let back: CodecStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
        assert_eq!(back.codec, "lz4");
    }

    #[test]
    fn shared_codec_across_threads() {
        let codec: Arc<dyn Codec> = Arc::new(Lz4Codec::new());
        let src = payload();

        std::thread::scope(|s| {
            for _ in 0..4 {
                let codec = Arc::clone(&codec);
                let src = &src;
                s.spawn(move || {
                    let mut packed = vec![0u8; compress_bound(src.len()).unwrap()];
                    let n = codec.compress(src, &mut packed).unwrap();
                    let mut out = vec![0u8; src.len()];
                    codec.decompress(&packed[..n], &mut out).unwrap();
                    assert_eq!(&out, src);
                });
            }
        });

        let stats = codec.stats();
        assert_eq!(stats.compress_calls, 4);
        assert_eq!(stats.decompress_calls, 4);
        assert_eq!(stats.bytes_original, 4 * src.len() as u64);
    }
}
