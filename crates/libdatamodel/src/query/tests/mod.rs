mod query_synthesizer_tests;
