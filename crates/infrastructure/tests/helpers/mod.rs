#![allow(dead_code)]

use ferrous_pdns_domain::config::DatabaseConfig;
use ferrous_pdns_infrastructure::database::run_migrations;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::{A, NS};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::net::Ipv4Addr;
use std::str::FromStr;

pub async fn create_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

pub fn test_database_config() -> DatabaseConfig {
    DatabaseConfig {
        cell_max_batch_size: 4,
        cell_flush_interval_ms: 10,
        ..DatabaseConfig::default()
    }
}

pub fn a_record(name: &str, ip: [u8; 4]) -> Record {
    Record::from_rdata(
        Name::from_str(name).unwrap(),
        300,
        RData::A(A(Ipv4Addr::from(ip))),
    )
}

pub fn ns_record(name: &str, target: &str) -> Record {
    Record::from_rdata(
        Name::from_str(name).unwrap(),
        3600,
        RData::NS(NS(Name::from_str(target).unwrap())),
    )
}

pub fn response_bytes(question: &str, answers: Vec<Record>, authority: Vec<Record>) -> Vec<u8> {
    let mut query = Query::new();
    query.set_name(Name::from_str(question).unwrap());
    query.set_query_type(RecordType::A);

    let mut message = Message::new(4242, MessageType::Response, OpCode::Query);
    message.add_query(query);
    for record in answers {
        message.add_answer(record);
    }
    for record in authority {
        message.add_name_server(record);
    }

    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).unwrap();
    buf
}

pub fn response_hex(question: &str, answers: Vec<Record>) -> String {
    hex::encode(response_bytes(question, answers, Vec::new()))
}
