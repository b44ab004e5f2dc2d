//! Activate the extension in an in-memory host and run the command through its key binding.
//!
//! Run with `RUST_LOG=line_marker_host=debug` to see the dispatch and the submitted batch.

use line_marker::{Position, Selection};
use line_marker_host::{
    CommandRegistry, ExtensionContext, ExtensionManifest, Keystroke, MemoryHost, activate,
    deactivate, logging,
};

fn main() {
    logging::init();

    let manifest = ExtensionManifest::builtin();
    manifest.validate().unwrap();

    let mut registry = CommandRegistry::new();
    let mut context = ExtensionContext::new();
    activate(&mut context, &mut registry).unwrap();

    let mut host = MemoryHost::new();
    let id = host.open("fn main() {\n    let x = 1;\n\n    run(x);\n}\n");
    host.set_selections(
        id,
        vec![
            Selection::caret(Position::new(0, 3)),
            Selection::new(Position::new(3, 6), Position::new(1, 0)),
        ],
    )
    .unwrap();

    let stroke: Keystroke = manifest.contributes.keybindings[0]
        .platform_key()
        .parse()
        .unwrap();
    let command = manifest.command_for(&stroke).unwrap();
    registry.execute(command, &mut host).unwrap();

    let text = host.editor(id).unwrap().editor().get_text();
    assert_eq!(text, "# fn main() {\n    # let x = 1;\n# \n    # run(x);\n}\n");
    println!("{text}");

    deactivate();
    context.dispose_all(&mut registry);
}
