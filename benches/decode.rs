use criterion::{black_box, criterion_group, criterion_main, Criterion};
use openmeteo_frames::{
    decode_response, RawEnvelope, RawInstantBlock, RawSeriesBlock, RawVariable, RequestSchema,
    VariableSpec,
};

const START: i64 = 1_760_857_200;
const DAYS: i64 = 16;

fn float_block(interval: i64, variables: usize) -> RawSeriesBlock {
    let rows = (DAYS * 86_400 / interval) as usize;
    RawSeriesBlock {
        time: START,
        time_end: START + DAYS * 86_400,
        interval,
        variables: (0..variables)
            .map(|v| RawVariable::floats((0..rows).map(|r| (r + v) as f32 * 0.1).collect()))
            .collect(),
    }
}

fn envelope() -> RawEnvelope {
    let mut daily = float_block(86_400, 2);
    daily
        .variables
        .push(RawVariable::int64s((0..DAYS).map(|d| START + d * 86_400 + 28_000).collect()));
    RawEnvelope {
        latitude: 49.25,
        longitude: -123.16,
        elevation: 79.0,
        timezone: "America/Los_Angeles".to_string(),
        timezone_abbreviation: "PDT".to_string(),
        utc_offset_seconds: -25_200,
        current: Some(RawInstantBlock {
            time: START,
            variables: vec![RawVariable::scalar(11.4), RawVariable::scalar(1.0)],
        }),
        minutely_15: Some(float_block(900, 4)),
        hourly: Some(float_block(3_600, 3)),
        daily: Some(daily),
    }
}

fn schema() -> RequestSchema {
    RequestSchema::builder()
        .current(vec![VariableSpec::float("temperature_2m"), VariableSpec::float("is_day")])
        .minutely_15(vec![
            VariableSpec::float("is_day"),
            VariableSpec::float("apparent_temperature"),
            VariableSpec::float("temperature_2m"),
            VariableSpec::float("precipitation"),
        ])
        .hourly(vec![
            VariableSpec::float("temperature_2m"),
            VariableSpec::float("apparent_temperature"),
            VariableSpec::float("precipitation"),
        ])
        .daily(vec![
            VariableSpec::float("temperature_2m_max"),
            VariableSpec::float("temperature_2m_min"),
            VariableSpec::int64("sunrise"),
        ])
        .build()
}

fn bench_decode(c: &mut Criterion) {
    let envelope = envelope();
    let schema = schema();
    c.bench_function("decode_response_16_days", |b| {
        b.iter(|| decode_response(black_box(&envelope), black_box(&schema)))
    });

    let hourly = decode_response(&envelope, &schema)
        .ok()
        .and_then(|r| r.hourly);
    if let Some(table) = hourly {
        c.bench_function("hourly_to_dataframe", |b| b.iter(|| black_box(&table).to_dataframe()));
    }
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
