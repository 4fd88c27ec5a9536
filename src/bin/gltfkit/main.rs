//! gltfkit CLI - Tool for inspecting GLB containers.

use std::env;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use gltfkit::glb::{CHUNK_BIN, CHUNK_JSON};
use gltfkit::prelude::*;

fn main() {
    let args: Vec<String> = env::args().collect();

    // Parse global flags
    let mut level = "warn";
    let mut filtered_args: Vec<&str> = Vec::new();
    for arg in &args[1..] {
        match arg.as_str() {
            "-v" | "--verbose" => level = "debug",
            "-vv" | "--trace" => level = "trace",
            "-q" | "--quiet" => level = "error",
            _ => filtered_args.push(arg),
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_target(false)
        .init();

    if filtered_args.is_empty() {
        print_usage(&args[0]);
        return;
    }

    match filtered_args[0] {
        "info" | "i" => {
            let file = require_file(&args[0], &filtered_args, "info");
            cmd_info(file);
        }
        "dump" | "d" => {
            let file = require_file(&args[0], &filtered_args, "dump");
            cmd_dump(file);
        }
        "accessor" | "a" => {
            let file = require_file(&args[0], &filtered_args, "accessor");
            let index = filtered_args.get(2).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                eprintln!("Usage: {} accessor <file.glb> <index>", args[0]);
                std::process::exit(1);
            });
            cmd_accessor(file, index);
        }
        "help" | "h" | "-h" | "--help" => print_usage(&args[0]),
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage(&args[0]);
            std::process::exit(1);
        }
    }
}

fn require_file<'a>(prog: &str, args: &[&'a str], cmd: &str) -> &'a str {
    match args.get(1) {
        Some(&file) => file,
        None => {
            eprintln!("Usage: {} {} <file.glb>", prog, cmd);
            std::process::exit(1);
        }
    }
}

fn print_usage(prog: &str) {
    println!(
        "gltfkit {} ({} {}) - Inspect GLB containers",
        env!("CARGO_PKG_VERSION"),
        env!("GLTFKIT_BUILD_DATE"),
        env!("GLTFKIT_BUILD_TIME"),
    );
    println!();
    println!("Usage: {} [options] <command> <file.glb>", prog);
    println!();
    println!("Commands:");
    println!("  i, info      Show container header and document summary");
    println!("  d, dump      Print the JSON document");
    println!("  a, accessor  Decode one accessor: accessor <file.glb> <index>");
    println!("  h, help      Show this help");
    println!();
    println!("Options:");
    println!("  -v, --verbose  Debug output");
    println!("  -vv, --trace   Trace output (very verbose)");
    println!("  -q, --quiet    Suppress output");
}

fn open(path: &str) -> IGlb {
    info!("Opening container: {}", path);
    match IGlb::open(path) {
        Ok(glb) => glb,
        Err(e) => {
            eprintln!("Failed to open {}: {}", path, e);
            std::process::exit(1);
        }
    }
}

fn cmd_info(path: &str) {
    let glb = open(path);
    debug!("Container parsed successfully");

    println!("Container: {}", path);
    println!("  version:         {}", glb.version());
    println!("  declared length: {} bytes", glb.declared_length());
    for (i, chunk) in glb.chunks().iter().enumerate() {
        let kind = match chunk.tag {
            CHUNK_BIN => "BIN",
            CHUNK_JSON => "JSON",
            _ => "unknown",
        };
        println!("  chunk {}: {} ({} bytes)", i, kind, chunk.data.len());
    }

    let doc = glb.document();
    println!("Document:");
    println!("  accessors:    {}", doc.accessors.len());
    println!("  bufferViews:  {}", doc.buffer_views.len());
    println!("  buffers:      {}", doc.buffers.len());
    println!("  meshes:       {}", doc.meshes.len());
    println!("  nodes:        {}", doc.nodes.len());
    println!("  materials:    {}", doc.materials.len());
    println!("  animations:   {}", doc.animations.len());
}

fn cmd_dump(path: &str) {
    let glb = open(path);
    match serde_json::to_string_pretty(glb.document()) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize document: {}", e);
            std::process::exit(1);
        }
    }
}

fn cmd_accessor(path: &str, index: usize) {
    let glb = open(path);
    let doc = glb.document();
    let Some(accessor) = doc.accessors.get(index) else {
        eprintln!("No accessor {} (document has {})", index, doc.accessors.len());
        std::process::exit(1);
    };
    println!(
        "Accessor {}: {} x {} ({})",
        index, accessor.count, accessor.shape, accessor.component_type
    );

    match glb.accessor_values(index) {
        Ok(AccessorValues::Tuples(items)) => {
            for (i, item) in items.iter().enumerate() {
                println!("  [{}] {:?}", i, item);
            }
        }
        Ok(AccessorValues::Scalars(values)) => {
            println!("  {:?}", values);
        }
        Err(e) => {
            eprintln!("Failed to decode accessor {}: {}", index, e);
            std::process::exit(1);
        }
    }
}
