use crate::utils::{Labels, Method, Metrics, Status, TracingContext};
use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, Status as SpanStatus, TraceContextExt, Tracer},
};
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::{error, info};

/// Opens a span per service operation and records its outcome in the
/// shared request metrics under the owning service's label.
#[derive(Debug, Clone)]
pub struct OperationTracer {
    service: &'static str,
    tracer_name: &'static str,
    metrics: Arc<Mutex<Metrics>>,
}

impl OperationTracer {
    pub fn new(
        service: &'static str,
        tracer_name: &'static str,
        metrics: Arc<Mutex<Metrics>>,
    ) -> Self {
        Self {
            service,
            tracer_name,
            metrics,
        }
    }

    fn tracer(&self) -> BoxedTracer {
        global::tracer(self.tracer_name)
    }

    pub fn start(&self, operation: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let tracer = self.tracer();
        let mut span = tracer
            .span_builder(operation.to_string())
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        span.set_attribute(KeyValue::new("service", self.service));
        info!("{}: starting {operation}", self.service);

        TracingContext {
            cx: Context::current_with_span(span),
            operation: operation.to_string(),
            start_time: Instant::now(),
        }
    }

    pub async fn success(&self, tracing_ctx: &TracingContext, method: Method, message: &str) {
        info!("{}: {} succeeded: {message}", self.service, tracing_ctx.operation);
        self.finish(tracing_ctx, method, Status::Success, message).await;
    }

    pub async fn error(&self, tracing_ctx: &TracingContext, method: Method, message: &str) {
        error!("{}: {} failed: {message}", self.service, tracing_ctx.operation);
        self.finish(tracing_ctx, method, Status::Error, message).await;
    }

    async fn finish(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        status: Status,
        message: &str,
    ) {
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();
        let span = tracing_ctx.cx.span();

        span.add_event(
            "Operation completed",
            vec![
                KeyValue::new("duration_secs", elapsed),
                KeyValue::new("message", message.to_string()),
            ],
        );
        if status == Status::Error {
            span.set_status(SpanStatus::error(message.to_string()));
        }

        let labels = Labels {
            service: self.service.to_string(),
            operation: tracing_ctx.operation.clone(),
            method,
            status,
        };
        self.metrics.lock().await.record(&labels, elapsed);

        span.end();
    }
}
