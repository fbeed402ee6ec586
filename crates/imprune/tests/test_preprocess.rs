use imprune::{preprocess, Config, Dialect, PreprocessError};
use pretty_assertions::assert_eq;

fn run(source: &str) -> String {
    preprocess(source, Dialect::Ecmascript, &Config::default()).expect("preprocess succeeds")
}

fn run_ts(source: &str) -> String {
    preprocess(source, Dialect::Typescript, &Config::default()).expect("preprocess succeeds")
}

#[test]
fn unused_named_specifiers_are_dropped_but_the_default_survives() {
    let source = "import React, { useState, useEffect } from 'react';\nconst App = () => <div>Hello World</div>;";
    assert_eq!(
        run(source),
        "import React from 'react';\nconst App = () => <div>Hello World</div>;"
    );
}

#[test]
fn fully_used_imports_come_back_untouched() {
    let source = "import { useState, useEffect } from 'react';\n\nconst [n, setN] = useState(0);\nuseEffect(() => setN(1), []);\n";
    assert_eq!(run(source), source);
}

#[test]
fn type_annotation_usage_keeps_an_import_alive() {
    let source = "import { FC, ReactNode } from 'react';\n\nconst App: FC = () => null;\n";
    assert_eq!(
        run_ts(source),
        "import { FC } from 'react';\n\nconst App: FC = () => null;\n"
    );
}

#[test]
fn an_emptied_import_statement_is_deleted_without_artifacts() {
    let source = "import { debounce } from 'lodash';\n\nconst x = 1;\n";
    assert_eq!(run(source), "const x = 1;\n");
}

#[test]
fn a_module_without_imports_is_returned_verbatim() {
    let source = "const x = 1;   // odd   spacing\n\n\nconsole.log( x );\n";
    assert_eq!(run(source), source);
}

#[test]
fn preprocess_is_idempotent() {
    let source = "import React, { useState } from 'react';\nimport { unused } from 'lodash';\n\nconst App = () => <div />;\n";
    let once = run(source);
    let twice = run(&once);
    assert_eq!(once, twice);
}

#[test]
fn jsx_markup_counts_as_a_reference() {
    let source = "import Button from './button';\nimport { Modal, Tooltip } from './overlays';\n\nexport const App = () => <Modal><Button /></Modal>;\n";
    assert_eq!(
        run(source),
        "import Button from './button';\nimport { Modal } from './overlays';\n\nexport const App = () => <Modal><Button /></Modal>;\n"
    );
}

#[test]
fn jsx_member_expressions_reference_their_root() {
    let source = "import { Form } from './form';\n\nexport const F = () => <Form.Field name=\"a\" />;\n";
    assert_eq!(run(source), source);
}

#[test]
fn default_specifiers_are_never_removed() {
    let source = "import styles from './styles.css';\n\nexport const n = 1;\n";
    assert_eq!(run(source), source);
}

#[test]
fn namespace_imports_are_never_removed() {
    let source = "import * as utils from './utils';\n\nexport const n = 1;\n";
    assert_eq!(run(source), source);
}

#[test]
fn side_effect_imports_are_never_removed() {
    let source = "import './polyfills';\nimport 'core-js/stable';\n\nexport const n = 1;\n";
    assert_eq!(run(source), source);
}

#[test]
fn always_keep_modules_survive_with_zero_references() {
    let source = "import { useState } from 'react';\n\nexport const n = 1;\n";
    assert_eq!(run(source), source);
}

#[test]
fn always_keep_list_is_overridable() {
    let mut config = Config::default();
    config.always_keep_modules.insert("./globals".to_owned());
    let source = "import { install } from './globals';\n\nexport const n = 1;\n";
    let output = preprocess(source, Dialect::Ecmascript, &config).expect("preprocess succeeds");
    assert_eq!(output, source);
}

#[test]
fn the_body_after_the_import_region_is_byte_identical() {
    let source = "import { used, unused } from 'pkg';\n// comment   with  spacing\nfunction f(  ) {\n    return used;   // trailing\n}\n";
    let output = run(source);

    let body_in = source.split_once('\n').expect("has newline").1;
    let body_out = output.split_once('\n').expect("has newline").1;
    assert_eq!(body_out, body_in);
    assert!(output.starts_with("import { used } from 'pkg';\n"));
}

#[test]
fn comments_between_imports_are_preserved() {
    let source = "import a from 'a';\n// explains b\nimport { b } from 'b';\n\na();\n";
    assert_eq!(run(source), "import a from 'a';\n// explains b\n\na();\n");
}

#[test]
fn removal_on_a_shared_line_keeps_the_used_neighbor() {
    let source = "import { a } from 'x'; import { b } from 'y';\n\nb();\n";
    assert_eq!(run(source), "import { b } from 'y';\n\nb();\n");
}

#[test]
fn deleting_an_import_preserves_the_body_blank_run() {
    let source = "import a from 'a';\n\nimport { gone } from 'g';\n\n\nrender();\na();\n";
    assert_eq!(run(source), "import a from 'a';\n\n\nrender();\na();\n");
}

#[test]
fn deleting_a_whole_import_group_does_not_double_blank_lines() {
    let source = "import a from 'a';\n\nimport { b } from 'b';\n\na();\n";
    assert_eq!(run(source), "import a from 'a';\n\na();\n");
}

#[test]
fn multiline_imports_narrow_to_a_single_line() {
    let source = "import {\n    keep,\n    drop,\n} from 'pkg';\n\nkeep();\n";
    assert_eq!(run(source), "import { keep } from 'pkg';\n\nkeep();\n");
}

#[test]
fn renamed_specifiers_are_filtered_on_the_local_name() {
    let source = "import { original as local, other } from 'pkg';\n\nlocal();\n";
    assert_eq!(
        run(source),
        "import { original as local } from 'pkg';\n\nlocal();\n"
    );
}

#[test]
fn type_only_imports_narrow_like_value_imports() {
    let source = "import type { Props, State } from './types';\n\nexport const init: Props = {};\n";
    assert_eq!(
        run_ts(source),
        "import type { Props } from './types';\n\nexport const init: Props = {};\n"
    );
}

#[test]
fn typeof_queries_keep_value_imports_alive() {
    let source = "import { config } from './config';\n\nexport type Config = typeof config;\n";
    assert_eq!(run_ts(source), source);
}

#[test]
fn locally_reexported_names_keep_their_import() {
    let source = "import { helper } from './util';\n\nexport { helper };\n";
    assert_eq!(run(source), source);
}

#[test]
fn malformed_source_surfaces_a_parse_error() {
    let err = preprocess(
        "import { from 'react';",
        Dialect::Ecmascript,
        &Config::default(),
    )
    .expect_err("malformed import must not be rewritten");
    assert!(matches!(err, PreprocessError::Parse(_)));
}

#[test]
fn invocations_are_independent() {
    // No state leaks between calls: a name used in one file must not keep
    // an import alive in the next.
    let first = run("import { a } from 'pkg';\n\na();\n");
    assert!(first.contains("import { a }"));

    let second = run("import { a } from 'pkg';\n\nexport const n = 1;\n");
    assert_eq!(second, "export const n = 1;\n");
}
