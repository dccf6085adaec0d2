//! Generated gRPC/protobuf bindings.

pub mod gateway {
    tonic::include_proto!("bezosphere");
}

pub mod broker {
    tonic::include_proto!("bezosphere.broker");
}
