mod data_model_version_tests;
